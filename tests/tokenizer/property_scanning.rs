use proptest::prelude::*;
use yard::{TokenKind, Tokenizer};

const MAX_INPUT_BYTES: usize = 256;

proptest! {
    #[test]
    fn next_token_handles_lossy_utf8_inputs_without_panicking(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let mut tokenizer = Tokenizer::new(&input);
        let mut produced = 0usize;

        loop {
            let token = tokenizer.next_token();
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            produced += 1;
            prop_assert!(
                produced <= input.len(),
                "tokenizer produced more tokens than input bytes"
            );
        }
    }

    #[test]
    fn produced_positions_stay_within_the_input(
        input in "[ -~]{0,64}"
    ) {
        for token in Tokenizer::new(&input) {
            let position = token.position.expect("produced tokens carry a position");
            prop_assert!(position.as_usize() < input.len());
            prop_assert!(token.kind != TokenKind::StartOfInput);
            prop_assert!(token.kind != TokenKind::EndOfInput);
        }
    }
}
