//! End-to-end checks of the public API.

use test_log::test;
use yijing_core::{
    decode_painting_with_options, DecodeError, DecodeOptions, ErrorCode, Line, Painting,
    PaintingError, ParseError,
};

fn dui() -> Painting {
    Painting::new([Line::Yang, Line::Yang, Line::Yin])
}

#[test]
fn test_dui_examples() {
    let p = dui();
    assert_eq!(p.len(), 3);
    assert_eq!(p.to_string(), "110");
    assert_eq!(p.to_bytes(), vec![0b0000_1011]);
    assert_eq!(p.hash_code(), 0b1110);
    assert_eq!("110".parse::<Painting>(), Ok(p.clone()));
    assert_eq!(Painting::from_bytes(&[0b1011]), Ok(p));
}

#[test]
fn test_appending_yang_on_top() {
    let mut lines: Vec<Line> = dui().iter().collect();
    lines.push(Line::Yang);
    let p = Painting::from(lines);
    assert_eq!(p.hash_code(), 0b11101);
    assert_eq!(p.to_string(), "1101");
    assert!(p > dui());
}

#[test]
fn test_empty_painting() {
    let p = Painting::empty();
    assert_eq!(p.hash_code(), 1);
    assert_eq!(p.to_string(), "");
    assert_eq!(p.to_bytes(), vec![0b1]);
    assert_eq!(Painting::from_bytes(&p.to_bytes()), Ok(p.clone()));
    assert!(p < Painting::new([Line::Yin, Line::Yin, Line::Yin]));
}

#[test]
fn test_errors_are_classified() {
    let parse = Painting::parse("1112").unwrap_err();
    assert_eq!(parse.code(), ErrorCode::Format);
    assert!(matches!(parse, ParseError::InvalidDigit { found: '2', .. }));

    let decode = Painting::from_bytes(&[0, 0]).unwrap_err();
    assert_eq!(decode.code(), ErrorCode::Decode);

    let index = dui().get(5).unwrap_err();
    assert_eq!(index.code(), ErrorCode::IndexOutOfRange);

    let raw = Painting::from_raw(&[1, 0, 2]).unwrap_err();
    assert_eq!(raw, PaintingError::InvalidLine { value: 2 });
    assert_eq!(raw.code(), ErrorCode::InvalidLine);
}

#[test]
fn test_decode_options_for_untrusted_input() {
    let options = DecodeOptions::strict().with_max_lines(64);
    let long = Painting::new(vec![Line::Yang; 65]);
    assert_eq!(
        decode_painting_with_options(&long.to_bytes(), options),
        Err(DecodeError::LengthExceedsLimit {
            field: "lines",
            len: 65,
            max: 64,
        })
    );

    let mut padded = dui().to_bytes();
    padded.push(0);
    assert_eq!(Painting::from_bytes(&padded), Ok(dui()));
    assert!(matches!(
        decode_painting_with_options(&padded, options),
        Err(DecodeError::NonMinimalEncoding { .. })
    ));
}

#[test]
fn test_line_tokens() {
    assert_eq!(Line::Yang.to_string(), "Yang");
    assert_eq!(Line::Yin.to_string(), "Yin");
    assert_eq!(" yang ".parse::<Line>(), Ok(Line::Yang));
    assert!(" yang yin ".parse::<Line>().is_err());
}

#[test]
fn test_paintings_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Painting>();
    assert_send_sync::<Line>();

    let p = std::sync::Arc::new(dui());
    let handle = {
        let p = std::sync::Arc::clone(&p);
        std::thread::spawn(move || p.to_string())
    };
    assert_eq!(handle.join().unwrap(), "110");
}
