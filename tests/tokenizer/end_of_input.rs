use yard::{TokenKind, Tokenizer};

#[test]
fn empty_input_yields_end_of_input_immediately() {
    let mut tokenizer = Tokenizer::new("");
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn end_of_input_repeats_forever() {
    let mut tokenizer = Tokenizer::new("a+b");
    while tokenizer.next_token().kind != TokenKind::EndOfInput {}

    for _ in 0..16 {
        assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
    }
}

#[test]
fn skip_only_input_yields_end_of_input() {
    let mut tokenizer = Tokenizer::new("  \t #?  ");
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn iterator_terminates_at_end_of_input() {
    let tokens: Vec<_> = Tokenizer::new("a+b").collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens
        .iter()
        .all(|token| token.kind != TokenKind::EndOfInput));
}

#[test]
fn tokenizer_never_produces_the_stack_sentinel() {
    let tokens: Vec<_> = Tokenizer::new("a=D(f-b*c+d,!e,g)").collect();
    assert!(tokens
        .iter()
        .all(|token| token.kind != TokenKind::StartOfInput));
}
