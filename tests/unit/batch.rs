use super::*;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "labelgif_batch_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
    image::RgbaImage::from_pixel(width, height, image::Rgba(rgba))
        .save(path)
        .unwrap();
}

fn config(source: &Path, output: &Path, pairs: Vec<PairDescriptor>) -> BatchConfig {
    BatchConfig {
        source_dir: source.to_path_buf(),
        output_dir: output.to_path_buf(),
        pairs,
        fonts: FontChain::builtin_only(),
        ..BatchConfig::default()
    }
}

#[test]
fn defaults_cover_documentation_pairs() {
    let cfg = BatchConfig::default();
    assert_eq!(cfg.pairs.len(), 6);
    assert_eq!(cfg.frame_duration_ms, 1500);
    assert_eq!(cfg.output_dir, PathBuf::from("images"));
    assert_eq!(cfg.fonts, FontChain::default());
}

#[test]
fn manifest_overrides_only_what_it_sets() {
    let cfg = BatchConfig::default().with_manifest(Manifest {
        source_dir: Some(PathBuf::from("shots")),
        frame_duration_ms: Some(900),
        ..Manifest::default()
    });
    assert_eq!(cfg.source_dir, PathBuf::from("shots"));
    assert_eq!(cfg.frame_duration_ms, 900);
    assert_eq!(cfg.output_dir, PathBuf::from("images"));
    assert_eq!(cfg.pairs, default_pairs());

    let cfg = cfg.with_manifest(Manifest {
        fonts: Some(vec![PathBuf::from("a.ttf")]),
        pairs: Some(vec![PairDescriptor::new("a", "b", "c")]),
        ..Manifest::default()
    });
    assert_eq!(cfg.fonts.candidates(), &[PathBuf::from("a.ttf")]);
    assert_eq!(cfg.pairs.len(), 1);
}

#[test]
fn missing_sources_are_skipped_without_output() {
    let src = scratch_dir("missing_src");
    let out = src.join("out");
    write_png(&src.join("only_before.png"), 8, 8, [1, 2, 3, 255]);
    write_png(&src.join("only_after.png"), 8, 8, [1, 2, 3, 255]);

    let cfg = config(
        &src,
        &out,
        vec![
            PairDescriptor::new("absent.png", "only_after.png", "a.gif"),
            PairDescriptor::new("only_before.png", "absent.png", "b.gif"),
        ],
    );
    let report = run_batch(&cfg).unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded(), 0);
    assert!(matches!(
        report.pairs[0].outcome,
        PairOutcome::MissingBefore { .. }
    ));
    assert!(matches!(
        report.pairs[1].outcome,
        PairOutcome::MissingAfter { .. }
    ));
    assert!(out.is_dir());
    assert!(!out.join("a.gif").exists());
    assert!(!out.join("b.gif").exists());

    std::fs::remove_dir_all(&src).ok();
}

#[test]
fn undecodable_source_fails_and_batch_continues() {
    let src = scratch_dir("corrupt");
    let out = src.join("out");
    std::fs::write(src.join("broken.png"), b"not a png").unwrap();
    write_png(&src.join("x.png"), 16, 16, [9, 9, 9, 255]);

    let cfg = config(
        &src,
        &out,
        vec![
            PairDescriptor::new("broken.png", "x.png", "broken.gif"),
            PairDescriptor::new("x.png", "x.png", "ok.gif"),
        ],
    );
    let mut seen = Vec::new();
    let report = run_batch_with(&cfg, |p| seen.push(p.descriptor.output.clone())).unwrap();

    assert_eq!(seen, vec!["broken.gif".to_string(), "ok.gif".to_string()]);
    let PairOutcome::Failed { error, .. } = &report.pairs[0].outcome else {
        panic!("expected failure, got {:?}", report.pairs[0].outcome);
    };
    assert!(format!("{error:?}").contains("open image"));
    assert!(report.pairs[1].outcome.is_created());
    assert_eq!(report.succeeded(), 1);
    assert!(out.join("ok.gif").exists());

    std::fs::remove_dir_all(&src).ok();
}

#[test]
fn uncreatable_output_dir_is_fatal() {
    let src = scratch_dir("bad_out");
    let blocker = src.join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let cfg = config(&src, &blocker.join("out"), vec![]);
    assert!(run_batch(&cfg).is_err());

    std::fs::remove_dir_all(&src).ok();
}
