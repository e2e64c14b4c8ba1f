//! Tests for client-side image validation
//!
//! Staging rejects non-image files and files over the backend's 16 MiB
//! request limit before any network traffic happens. The error order
//! matters: a huge .mov should hear "not an image", not "too large".

use std::path::Path;

use parktui::logic::upload::{
    is_image_file, mime_for, validate_image, UploadError, MAX_IMAGE_BYTES,
};

#[test]
fn extension_check_is_case_insensitive() {
    assert!(is_image_file(Path::new("/tmp/CAR.PNG")));
    assert!(is_image_file(Path::new("photo.JpEg")));
    assert!(!is_image_file(Path::new("notes.txt")));
    assert!(!is_image_file(Path::new("no_extension")));
}

#[test]
fn double_extensions_use_the_final_one() {
    assert!(!is_image_file(Path::new("car.png.exe")));
    assert!(is_image_file(Path::new("archive.tar.jpg")));
}

#[test]
fn limit_is_sixteen_mebibytes_inclusive() {
    assert!(validate_image(Path::new("ok.png"), MAX_IMAGE_BYTES).is_ok());
    let err = validate_image(Path::new("big.png"), MAX_IMAGE_BYTES + 1).unwrap_err();
    match err {
        UploadError::TooLarge { size } => assert_eq!(size, MAX_IMAGE_BYTES + 1),
        other => panic!("expected TooLarge, got {:?}", other),
    }
}

#[test]
fn type_error_wins_when_both_checks_fail() {
    let err = validate_image(Path::new("huge.mov"), MAX_IMAGE_BYTES * 2).unwrap_err();
    assert_eq!(err, UploadError::NotAnImage);
}

#[test]
fn error_messages_are_user_presentable() {
    assert_eq!(
        UploadError::NotAnImage.to_string(),
        "Please select an image file (png/jpg/jpeg/gif)"
    );
    let too_large = UploadError::TooLarge {
        size: 20 * 1024 * 1024,
    };
    assert_eq!(
        too_large.to_string(),
        "File size must be less than 16MB (got 20.0 MB)"
    );
}

#[test]
fn upload_mime_matches_extension() {
    assert_eq!(mime_for(Path::new("a.png")), "image/png");
    assert_eq!(mime_for(Path::new("a.GIF")), "image/gif");
    // jpeg is the backend's de-facto default
    assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
    assert_eq!(mime_for(Path::new("a")), "image/jpeg");
}
