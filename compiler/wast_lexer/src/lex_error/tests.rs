use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(LexErrorKind::UnexpectedChar.to_string(), "unexpected char");
    assert_eq!(
        LexErrorKind::UnexpectedToken {
            text: "i32.addd".to_owned()
        }
        .to_string(),
        "unexpected token \"i32.addd\""
    );
    assert_eq!(
        LexErrorKind::BadEscape {
            text: "\\q".to_owned()
        }
        .to_string(),
        "bad escape \"\\q\""
    );
    assert_eq!(LexErrorKind::UnexpectedEofInString.to_string(), "unexpected EOF");
    assert_eq!(
        LexErrorKind::SourceRead {
            reason: "disk on fire".to_owned()
        }
        .to_string(),
        "unable to read source: disk on fire"
    );
}

#[test]
fn recoverable_errors_are_not_fatal() {
    assert!(!LexErrorKind::UnexpectedChar.is_fatal());
    assert!(!LexErrorKind::NewlineInString.is_fatal());
    assert!(!LexErrorKind::IllegalCharInString.is_fatal());
    assert!(!LexErrorKind::BadEscape {
        text: "\\q".to_owned()
    }
    .is_fatal());
}

#[test]
fn stream_ending_errors_are_fatal() {
    assert!(LexErrorKind::UnexpectedEofInString.is_fatal());
    assert!(LexErrorKind::UnterminatedBlockComment.is_fatal());
    assert!(LexErrorKind::BufferAllocation.is_fatal());
    assert!(LexErrorKind::SourceRead {
        reason: "gone".to_owned()
    }
    .is_fatal());
}
