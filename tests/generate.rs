use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use pwaicons::{
    Error, GeneratorParams, ICON_SIZES, IconFormat, MANIFEST_FILENAME, ManifestIcon,
    generate_icons,
};

/// Non-square source with a transparent border and an opaque centre.
fn write_source(path: &Path) {
    let mut img = RgbaImage::from_pixel(640, 480, Rgba([0, 0, 0, 0]));
    for y in 120..360 {
        for x in 160..480 {
            img.put_pixel(x, y, Rgba([20, 140, 220, 255]));
        }
    }
    img.save(path).expect("fixture should save");
}

fn listed_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn produces_exactly_the_size_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_source(&source);
    let out = dir.path().join("site").join("public");
    assert!(!out.exists());

    let report = generate_icons(&GeneratorParams::new(&source, &out)).unwrap();
    assert_eq!(report.source.as_deref(), Some(source.as_path()));

    let mut expected: Vec<String> = ICON_SIZES.iter().map(|s| s.filename.to_string()).collect();
    expected.sort();
    assert_eq!(listed_files(&out), expected);

    for spec in &ICON_SIZES {
        let path = out.join(spec.filename);
        assert_eq!(
            image::image_dimensions(&path).unwrap(),
            (spec.width, spec.height),
            "{}",
            spec.filename
        );

        let bytes = fs::read(&path).unwrap();
        let expected_format = match spec.format().unwrap() {
            IconFormat::Png => ImageFormat::Png,
            IconFormat::Ico => ImageFormat::Ico,
        };
        assert_eq!(image::guess_format(&bytes).unwrap(), expected_format);
    }
}

#[test]
fn alpha_channel_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_source(&source);
    let out = dir.path().join("public");

    generate_icons(&GeneratorParams::new(&source, &out)).unwrap();

    let icon = image::open(out.join("pwa-512x512.png")).unwrap().into_rgba8();
    assert_eq!(icon.get_pixel(0, 0).0[3], 0, "corner stays transparent");
    assert_eq!(icon.get_pixel(256, 256).0[3], 255, "centre stays opaque");
}

#[test]
fn rerun_overwrites_with_same_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_source(&source);
    let out = dir.path().join("public");
    let params = GeneratorParams::new(&source, &out);

    let first = generate_icons(&params).unwrap();
    let second = generate_icons(&params).unwrap();

    assert_eq!(first.icons, second.icons);
    assert_eq!(listed_files(&out).len(), ICON_SIZES.len());
    for icon in &second.icons {
        assert_eq!(
            image::image_dimensions(&icon.path).unwrap(),
            (icon.width, icon.height)
        );
    }
}

#[test]
fn source_file_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_source(&source);
    let before = fs::read(&source).unwrap();

    generate_icons(&GeneratorParams::new(&source, dir.path().join("public"))).unwrap();

    assert_eq!(fs::read(&source).unwrap(), before);
}

#[test]
fn missing_source_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let params = GeneratorParams::new(dir.path().join("absent.png"), dir.path().join("public"));

    match generate_icons(&params) {
        Err(Error::SourceNotFound { path }) => assert_eq!(path, params.source),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn manifest_lists_generated_icons() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.png");
    write_source(&source);
    let out = dir.path().join("public");

    let mut params = GeneratorParams::new(&source, &out);
    params.manifest = true;
    let report = generate_icons(&params).unwrap();
    assert_eq!(report.manifest, Some(out.join(MANIFEST_FILENAME)));

    let text = fs::read_to_string(out.join(MANIFEST_FILENAME)).unwrap();
    let entries: Vec<ManifestIcon> = serde_json::from_str(&text).unwrap();
    assert_eq!(entries.len(), ICON_SIZES.len());
    assert_eq!(entries[0].src, "/pwa-192x192.png");
    assert_eq!(entries[0].sizes, "192x192");
    assert_eq!(entries[3].src, "/favicon.ico");
    assert_eq!(entries[3].mime_type, "image/x-icon");
}
