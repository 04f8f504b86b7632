use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

// A 12x6 picture: flat blue with a bright vertical stripe.
fn write_input(path: &Path) {
    let image = RgbImage::from_fn(12, 6, |x, _| {
        if x == 7 || x == 8 {
            Rgb([250, 240, 10])
        } else {
            Rgb([20, 30, 200])
        }
    });
    image.save(path).unwrap();
}

#[test]
fn halves_the_width_and_marks_the_seams() {
    let dir = tempdir().unwrap();
    let (input, output, seams) = (
        dir.path().join("input.png"),
        dir.path().join("resized.png"),
        dir.path().join("seams.png"),
    );
    write_input(&input);

    Command::cargo_bin("seamslice")
        .unwrap()
        .arg(&input)
        .arg("--scale")
        .arg("0.5")
        .arg("-o")
        .arg(&output)
        .arg("-s")
        .arg(&seams)
        .assert()
        .success();

    let resized = image::open(&output).unwrap();
    assert_eq!(resized.dimensions(), (6, 6));

    let marked = image::open(&seams).unwrap().to_rgb8();
    assert_eq!(marked.dimensions(), (12, 6));
    assert!(marked.pixels().any(|p| *p == Rgb([255, 0, 0])));
}

#[test]
fn full_scale_is_a_copy() {
    let dir = tempdir().unwrap();
    let (input, output, seams) = (
        dir.path().join("input.png"),
        dir.path().join("resized.png"),
        dir.path().join("seams.png"),
    );
    write_input(&input);

    Command::cargo_bin("seamslice")
        .unwrap()
        .arg(&input)
        .args(&["--scale", "1.0"])
        .arg("-o")
        .arg(&output)
        .arg("-s")
        .arg(&seams)
        .assert()
        .success();

    let original = image::open(&input).unwrap().to_rgb8();
    assert_eq!(image::open(&output).unwrap().to_rgb8(), original);
    assert_eq!(image::open(&seams).unwrap().to_rgb8(), original);
}

#[test]
fn oversized_inputs_are_shrunk_first() {
    let dir = tempdir().unwrap();
    let (input, output, seams, energy) = (
        dir.path().join("input.png"),
        dir.path().join("resized.png"),
        dir.path().join("seams.png"),
        dir.path().join("energy.png"),
    );
    write_input(&input);

    Command::cargo_bin("seamslice")
        .unwrap()
        .arg(&input)
        .args(&["--max-size", "6", "--scale", "0.5"])
        .arg("-o")
        .arg(&output)
        .arg("-s")
        .arg(&seams)
        .arg("-e")
        .arg(&energy)
        .assert()
        .success();

    assert_eq!(image::open(&seams).unwrap().dimensions(), (6, 3));
    assert_eq!(image::open(&output).unwrap().dimensions(), (3, 3));
    assert_eq!(image::open(&energy).unwrap().dimensions(), (6, 3));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("seamslice")
        .unwrap()
        .arg(dir.path().join("nothing-here.png"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn bad_scale_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.png");
    write_input(&input);
    Command::cargo_bin("seamslice")
        .unwrap()
        .arg(&input)
        .args(&["--scale", "half"])
        .current_dir(dir.path())
        .assert()
        .failure();
}
