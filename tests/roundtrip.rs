use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use stegoshield_core::error::StegoShieldError;
use stegoshield_core::{commands, EmbedError, ExtractError};

fn checkerboard(width: u32, height: u32, block: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if ((x / block) + (y / block)) % 2 == 0 {
            Rgb([235, 235, 235])
        } else {
            Rgb([20, 20, 20])
        }
    })
}

fn write_png(image: &RgbImage, path: &Path) {
    image.save(path).expect("Failed to write test image");
}

#[test]
fn should_hide_and_unveil_a_message_through_files() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let secret = out_dir.path().join("secret.png");
    write_png(&checkerboard(100, 100, 10), &carrier);

    let report = commands::hide(&carrier, &secret, "hello", "secret")
        .expect("Failed to hide message");

    assert!(report.capacity > 0);
    // header + "xxxxxxxx::hello"
    assert_eq!(report.used_bits, 32 + 8 * 15);
    assert!(secret.exists(), "stego image was not written");

    let message = commands::unveil(&secret, "secret").expect("Failed to unveil message");
    assert_eq!(message, "hello");
}

#[test]
fn should_reject_the_wrong_password_through_files() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let secret = out_dir.path().join("secret.png");
    write_png(&checkerboard(100, 100, 10), &carrier);

    commands::hide(&carrier, &secret, "hello", "secret").expect("Failed to hide message");

    let result = commands::unveil(&secret, "wrong");
    assert!(matches!(
        result,
        Err(StegoShieldError::Extract(ExtractError::PasswordMismatch))
    ));
}

#[test]
fn should_survive_the_png_save_reload_cycle_with_unicode() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let secret = out_dir.path().join("secret.png");
    write_png(&checkerboard(128, 128, 8), &carrier);

    let message = "Die Würde des Menschen ist unantastbar. 🛡️";
    commands::hide(&carrier, &secret, message, "pw").expect("Failed to hide message");

    assert_eq!(commands::unveil(&secret, "pw").unwrap(), message);
}

#[test]
fn should_roundtrip_an_empty_message() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let secret = out_dir.path().join("secret.png");
    write_png(&checkerboard(64, 64, 8), &carrier);

    let report = commands::hide(&carrier, &secret, "", "pw").expect("Failed to hide message");
    assert_eq!(report.used_bits, 32 + 8 * 10);

    assert_eq!(commands::unveil(&secret, "pw").unwrap(), "");
}

#[test]
fn should_refuse_a_smooth_cover() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("flat.png");
    let secret = out_dir.path().join("secret.png");
    write_png(&RgbImage::from_pixel(50, 50, Rgb([140, 140, 140])), &carrier);

    assert_eq!(commands::inspect_capacity(&carrier).unwrap(), 0);

    let result = commands::hide(&carrier, &secret, "hi", "pw");
    match result {
        Err(StegoShieldError::Embed(EmbedError::InsufficientCapacity { capacity, .. })) => {
            assert_eq!(capacity, 0);
        }
        other => panic!("expected a capacity error, got {other:?}"),
    }
    assert!(!secret.exists(), "no stego image may be written on failure");
}

#[test]
fn should_refuse_a_lossy_output_target() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let secret = out_dir.path().join("secret.jpg");
    write_png(&checkerboard(64, 64, 8), &carrier);

    let result = commands::hide(&carrier, &secret, "hello", "pw");
    assert!(matches!(result, Err(StegoShieldError::LossyOutputFormat)));
}

#[test]
fn should_fail_cleanly_on_a_non_stego_image() {
    let out_dir = TempDir::new().unwrap();
    let innocent = out_dir.path().join("innocent.png");

    // Deterministic pseudo-noise: textured enough to have capacity, but
    // nothing was ever embedded.
    let mut state = 0xdead_beef_u32;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 24) as u8
    };
    let mut noise = RgbImage::new(64, 64);
    for pixel in noise.pixels_mut() {
        *pixel = Rgb([next(), next(), next()]);
    }
    write_png(&noise, &innocent);

    let result = commands::unveil(&innocent, "pw");
    assert!(result.is_err(), "noise must never decode into a message");
}

#[test]
fn should_report_missing_carrier_file() {
    let out_dir = TempDir::new().unwrap();
    let result = commands::hide(
        &out_dir.path().join("nope.png"),
        &out_dir.path().join("out.png"),
        "msg",
        "pw",
    );
    assert!(matches!(result, Err(StegoShieldError::InvalidImageMedia)));
}
