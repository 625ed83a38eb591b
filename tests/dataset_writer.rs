use std::fs;

use font_dataset::{
    dataset::DatasetWriter, fit::fit, wrap::wrap, ColorPair, DatasetConfig, FixedAdvanceBackend,
    Rgb8, TextSource,
};

fn config_in(root: &std::path::Path) -> DatasetConfig {
    let mut cfg = DatasetConfig::default();
    cfg.output.root = root.to_path_buf();
    cfg
}

#[test]
fn hello_world_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    let backend = FixedAdvanceBackend::default();

    assert_eq!(wrap("Hello, world!", 22), "Hello, world!");
    let params = cfg.fit_params();
    assert_eq!((params.max_width, params.max_height), (824.0, 824.0));
    let fitted = fit("Hello, world!", &backend, &params);
    assert!((16..=576).contains(&fitted.size));
    assert_eq!(fitted.text, "Hello, world!");

    let writer = DatasetWriter::new(&backend, &cfg, "Demo");
    let texts = vec!["Hello, world!".to_string()];
    let summary = writer.run(&texts).unwrap();
    assert_eq!(summary.samples, 1);
    assert_eq!(summary.images_written, 1);

    let (png, txt) = writer.sample_paths(0, false);
    assert_eq!(png, tmp.path().join("Demo").join("Demo_0.png"));
    let caption = fs::read_to_string(&txt).unwrap();
    assert!(caption.contains("\"Hello, world!\""));
    assert!(caption.contains("text color #000000"));
    assert!(caption.contains("background color #ffffff"));

    let img = image::open(&png).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (1024, 1024));
}

#[test]
fn inverted_variant_written_with_swapped_roles() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cfg = config_in(tmp.path());
    cfg.colors.inverted_variant = true;
    cfg.colors.foreground = Rgb8(0x20, 0x40, 0x60);
    cfg.colors.background = Rgb8(0xf0, 0xe0, 0xd0);
    let backend = FixedAdvanceBackend::default();
    let writer = DatasetWriter::new(&backend, &cfg, "Inv");
    let texts = vec!["Wa".to_string(), "Sphinx of black quartz, judge my vow.".to_string()];
    let summary = writer.run(&texts).unwrap();
    assert_eq!(summary.images_written, 4);

    let pair = ColorPair::new(cfg.colors.foreground, cfg.colors.background);
    for index in 0..texts.len() {
        for inverted in [false, true] {
            let (png, txt) = writer.sample_paths(index, inverted);
            let img = image::open(&png).unwrap().to_rgb8();
            let caption = fs::read_to_string(&txt).unwrap();
            let ink = Rgb8::from(*img.get_pixel(512, 512));
            let canvas = Rgb8::from(*img.get_pixel(0, 0));
            assert_eq!(ink, pair.ink(inverted), "{}", png.display());
            assert_eq!(canvas, pair.canvas(inverted), "{}", png.display());
            assert!(caption.contains(&format!("text color {}", ink.to_hex())), "{caption}");
            let bg = format!("background color {}", canvas.to_hex());
            assert!(caption.contains(&bg), "{caption}");
        }
    }
    assert!(tmp.path().join("Inv").join("Inv_1i.png").exists());
    assert!(tmp.path().join("Inv").join("Inv_1i.txt").exists());
}

#[test]
fn rerun_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cfg = config_in(tmp.path());
    cfg.colors.inverted_variant = true;
    let backend = FixedAdvanceBackend::default();
    let writer = DatasetWriter::new(&backend, &cfg, "Same");
    let source = TextSource::builtin();
    let texts: Vec<String> = source.entries().iter().rev().take(5).cloned().collect();

    writer.run(&texts).unwrap();
    let mut first = Vec::new();
    for i in 0..texts.len() {
        for inv in [false, true] {
            let (png, txt) = writer.sample_paths(i, inv);
            first.push((fs::read(&png).unwrap(), fs::read(&txt).unwrap()));
        }
    }
    writer.run(&texts).unwrap();
    let mut k = 0;
    for i in 0..texts.len() {
        for inv in [false, true] {
            let (png, txt) = writer.sample_paths(i, inv);
            assert_eq!(first[k].0, fs::read(&png).unwrap());
            assert_eq!(first[k].1, fs::read(&txt).unwrap());
            k += 1;
        }
    }
}

#[test]
fn oversized_samples_are_counted_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    // Each char is 40x size wide: nothing on the ladder fits.
    let backend = FixedAdvanceBackend::new(40.0);
    let writer = DatasetWriter::new(&backend, &cfg, "Big");
    let summary = writer.run(&["Datenanalyse".to_string(), "x".to_string()]).unwrap();
    assert_eq!(summary.samples, 2);
    assert_eq!(summary.overflowed, 2);
    let (png, _) = writer.sample_paths(0, false);
    assert_eq!(image::image_dimensions(&png).unwrap(), (1024, 1024));
}

#[test]
fn unwritable_output_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where the dataset directory should go.
    let blocker = tmp.path().join("Blocked");
    fs::write(&blocker, "not a dir").unwrap();
    let cfg = config_in(tmp.path());
    let backend = FixedAdvanceBackend::default();
    let writer = DatasetWriter::new(&backend, &cfg, "Blocked");
    let err = writer.run(&["a".to_string()]).unwrap_err();
    assert!(matches!(err, font_dataset::DatasetError::Write { .. }), "{err}");
}
