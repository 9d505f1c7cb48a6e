use super::*;

#[test]
fn default_pairs_match_documentation_screenshots() {
    let pairs = default_pairs();
    assert_eq!(pairs.len(), 6);
    assert_eq!(
        pairs[0],
        PairDescriptor::new(
            "uv_CodeAction_UseWorkspaceDependency_Before.png",
            "uv_CodeAction_UseWorkspaceDependency_After.png",
            "uv_CodeAction_UseWorkspaceDependency.gif",
        )
    );
    assert_eq!(
        pairs[4].before,
        "Cargo_CodeAction_ConevrtDependencyToTableFormat_Before.png"
    );
    assert_eq!(
        pairs[4].output,
        "Cargo_CodeAction_ConvertDependencyToTableFormat.gif"
    );
    assert_eq!(
        pairs[5].output,
        "Cargo_CodeAction_AddToWorkspaceAndInheritDependency.gif"
    );
    for p in &pairs {
        p.validate().unwrap();
    }
}

#[test]
fn empty_manifest_overrides_nothing() {
    let m = Manifest::from_json_str("{}").unwrap();
    assert_eq!(m, Manifest::default());
}

#[test]
fn manifest_fields_parse() {
    let m = Manifest::from_json_str(
        r#"{
            "source_dir": "docs/public",
            "output_dir": "/tmp/gifs",
            "frame_duration_ms": 800,
            "fonts": ["fonts/Bold.ttf"],
            "pairs": [{ "before": "a.png", "after": "b.png", "output": "ab.gif" }]
        }"#,
    )
    .unwrap();
    assert_eq!(m.source_dir, Some(PathBuf::from("docs/public")));
    assert_eq!(m.output_dir, Some(PathBuf::from("/tmp/gifs")));
    assert_eq!(m.frame_duration_ms, Some(800));
    assert_eq!(m.fonts, Some(vec![PathBuf::from("fonts/Bold.ttf")]));
    assert_eq!(
        m.pairs,
        Some(vec![PairDescriptor::new("a.png", "b.png", "ab.gif")])
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Manifest::from_json_str(r#"{ "sourcedir": "x" }"#).unwrap_err();
    assert!(matches!(err, LabelGifError::Config(_)));

    let err = Manifest::from_json_str(
        r#"{ "pairs": [{ "before": "a", "after": "b", "output": "c", "label": "x" }] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, LabelGifError::Config(_)));
}

#[test]
fn empty_descriptor_names_are_rejected() {
    let err = Manifest::from_json_str(
        r#"{ "pairs": [{ "before": "a.png", "after": " ", "output": "c.gif" }] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, LabelGifError::Validation(_)));
    assert!(err.to_string().contains("after"));
}

#[test]
fn load_rebases_relative_paths_on_manifest_dir() {
    let dir = std::env::temp_dir().join(format!(
        "labelgif_manifest_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("gifs.json");
    std::fs::write(
        &path,
        r#"{ "source_dir": "shots", "output_dir": "/abs/out", "fonts": ["f.ttf"] }"#,
    )
    .unwrap();

    let m = Manifest::load(&path).unwrap();
    assert_eq!(m.source_dir, Some(dir.join("shots")));
    assert_eq!(m.output_dir, Some(PathBuf::from("/abs/out")));
    assert_eq!(m.fonts, Some(vec![dir.join("f.ttf")]));
    assert_eq!(m.pairs, None);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_missing_file_names_the_path() {
    let err = Manifest::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:?}").contains("open manifest"));
}
