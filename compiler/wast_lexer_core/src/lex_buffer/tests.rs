use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn buffer(data: &[u8], initial_size: usize) -> LexBuffer<'_> {
    LexBuffer::with_initial_size(Source::from_bytes(data), initial_size)
}

/// Consume every byte, starting a fresh one-byte token each time.
fn drain(buffer: &mut LexBuffer<'_>) -> Vec<u8> {
    let mut out = Vec::new();
    while !buffer.is_end() {
        buffer.begin_token();
        out.push(buffer.current());
        buffer.advance();
    }
    out
}

// === Construction ===

#[test]
fn nothing_is_allocated_up_front() {
    let buffer = buffer(b"(module)", INITIAL_BUFFER_SIZE);
    assert_eq!(buffer.capacity(), 0);
    assert_eq!(buffer.cursor_offset(), 0);
}

#[test]
fn empty_source_is_immediately_at_end() {
    let mut buffer = buffer(b"", 8);
    assert!(buffer.is_end());
    assert_eq!(buffer.current(), 0);
    assert_eq!(buffer.peek(5), 0);
    assert!(buffer.take_fatal().is_none());
}

#[test]
fn first_allocation_uses_initial_size() {
    let mut buffer = buffer(b"abc", 64);
    assert_eq!(buffer.current(), b'a');
    assert_eq!(buffer.capacity(), 64);
}

#[test]
fn initial_size_is_fixed_after_first_allocation() {
    let mut buffer = buffer(b"abc", 64);
    buffer.set_initial_size(128);
    assert_eq!(buffer.current(), b'a');
    assert_eq!(buffer.capacity(), 128);
    buffer.set_initial_size(8);
    assert_eq!(buffer.capacity(), 128);
}

// === Reading ===

#[test]
fn peeks_see_ahead_without_consuming() {
    let mut buffer = buffer(b"(;x", 4);
    assert_eq!(buffer.peek(0), b'(');
    assert_eq!(buffer.peek(1), b';');
    assert_eq!(buffer.peek(2), b'x');
    assert_eq!(buffer.peek(3), 0);
    assert_eq!(buffer.cursor_offset(), 0);
}

#[test]
fn bytes_survive_many_refills() {
    let data: Vec<u8> = (0..5000u32).map(|i| b'a' + (i % 26) as u8).collect();
    let mut buffer = buffer(&data, 1);
    assert_eq!(drain(&mut buffer), data);
}

#[test]
fn advance_stops_at_end() {
    let mut buffer = buffer(b"ab", 8);
    buffer.advance_n(10);
    assert_eq!(buffer.cursor_offset(), 2);
    assert!(buffer.is_end());
}

#[test]
fn interior_nul_is_not_end() {
    let mut buffer = buffer(b"a\0b", 8);
    assert_eq!(buffer.peek(1), 0);
    assert!(!buffer.is_end_at(1));
    assert!(!buffer.is_end_at(2));
    assert!(buffer.is_end_at(3));
}

#[test]
fn fill_after_end_reports_exhausted() {
    let mut buffer = buffer(b"x", 64);
    buffer.advance();
    assert!(buffer.is_end());
    assert!(matches!(buffer.fill(1), Err(FillError::Exhausted)));
}

// === Token Preservation ===

#[test]
fn long_token_forces_growth() {
    let data = vec![b'z'; 1000];
    let mut buffer = buffer(&data, 4);
    buffer.begin_token();
    buffer.eat_while(|b| b == b'z');
    assert_eq!(buffer.token_bytes(), data.as_slice());
    assert_eq!(buffer.token_offset(), 0);
    assert!(buffer.capacity() >= 1000 + LOOKAHEAD_PADDING);
    assert!(buffer.capacity().is_power_of_two());
}

#[test]
fn short_tokens_compact_instead_of_growing() {
    let data: Vec<u8> = b"abcd".repeat(250);
    let mut buffer = buffer(&data, 32);
    let mut offsets = Vec::new();
    while !buffer.is_end() {
        buffer.begin_token();
        buffer.advance_n(4);
        assert_eq!(buffer.token_bytes(), b"abcd");
        offsets.push(buffer.token_offset());
    }
    assert_eq!(buffer.capacity(), 32);
    assert_eq!(offsets.len(), 250);
    assert!(offsets.iter().enumerate().all(|(i, &off)| off == i * 4));
}

#[test]
fn marker_shifts_with_refill() {
    let data = b"\"hello refill world\"";
    let mut buffer = buffer(data, 2);
    buffer.begin_token();
    buffer.advance_n(7);
    buffer.mark();
    buffer.advance_n(6);
    assert_eq!(buffer.marked_bytes(), b"refill");
    assert_eq!(buffer.marker_offset(), 7);
    buffer.eat_while(|b| b != b'"');
    buffer.advance();
    assert_eq!(buffer.token_bytes(), data);
}

// === Skipping ===

#[test]
fn skip_until_crosses_refills() {
    let mut data = vec![b'.'; 300];
    data.push(b'\n');
    data.extend_from_slice(b"rest");
    let mut buffer = buffer(&data, 8);
    assert!(buffer.skip_until(b'\n'));
    assert_eq!(buffer.cursor_offset(), 300);
    assert_eq!(buffer.current(), b'\n');
    buffer.advance();
    assert!(!buffer.skip_until(b'\n'));
    assert!(buffer.is_end());
    assert_eq!(buffer.cursor_offset(), data.len());
}

#[test]
fn skip_until3_finds_the_nearest() {
    let mut buffer = buffer(b"comment text ;) more (; \n", 4);
    assert_eq!(buffer.skip_until3(b'(', b';', b'\n'), Some(b';'));
    assert_eq!(buffer.cursor_offset(), 13);
    buffer.advance_n(2);
    assert_eq!(buffer.skip_until3(b'(', b';', b'\n'), Some(b'('));
    buffer.advance_n(2);
    assert_eq!(buffer.skip_until3(b'(', b';', b'\n'), Some(b'\n'));
    buffer.advance();
    assert_eq!(buffer.skip_until3(b'(', b';', b'\n'), None);
}

#[test]
fn eat_while_stops_at_first_mismatch() {
    let mut buffer = buffer(b"    \t  x", 2);
    buffer.eat_while(|b| b == b' ' || b == b'\t');
    assert_eq!(buffer.cursor_offset(), 7);
    assert_eq!(buffer.current(), b'x');
}

proptest! {
    #[test]
    fn any_initial_size_reproduces_the_input(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        initial_size in 1usize..80,
    ) {
        let mut buffer = buffer(&data, initial_size);
        let drained = drain(&mut buffer);
        prop_assert_eq!(&drained, &data);
        prop_assert!(buffer.take_fatal().is_none());
    }

    #[test]
    fn tokens_keep_their_bytes(
        data in proptest::collection::vec(any::<u8>(), 1..400),
        token_len in 1usize..50,
        initial_size in 1usize..40,
    ) {
        let mut buffer = buffer(&data, initial_size);
        let mut rebuilt = Vec::new();
        while !buffer.is_end() {
            buffer.begin_token();
            let start = buffer.token_offset();
            buffer.advance_n(token_len);
            let end = buffer.cursor_offset();
            prop_assert_eq!(buffer.token_bytes(), &data[start..end]);
            rebuilt.extend_from_slice(buffer.token_bytes());
        }
        prop_assert_eq!(&rebuilt, &data);
    }
}
