use proptest::prelude::*;
use yard::tokenizer::OPERATOR_SYMBOLS;
use yard::to_rpn;

const MAX_INPUT_BYTES: usize = 256;

/// Strategy for flat expressions: identifiers joined by binary operators,
/// no parentheses or separators.
fn arb_flat_expression() -> impl Strategy<Value = String> {
    let operands: Vec<char> = ('a'..='z').chain('0'..='9').collect();
    let ident = prop::sample::select(operands);
    let op = prop::sample::select("^*/%+-=".chars().collect::<Vec<_>>());

    let tail = prop::collection::vec((op, ident.clone()), 0..16);
    (ident, tail).prop_map(|(first, rest)| {
        let mut expression = String::new();
        expression.push(first);
        for (op, ident) in rest {
            expression.push(op);
            expression.push(ident);
        }
        expression
    })
}

proptest! {
    #[test]
    fn flat_expressions_preserve_token_count(input in arb_flat_expression()) {
        let rendered = to_rpn(&input).expect("flat expressions always convert");
        prop_assert_eq!(
            rendered.len(),
            input.len(),
            "tokens were created or dropped for {:?}",
            input
        );
    }

    #[test]
    fn conversion_is_idempotent_across_calls(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        prop_assert_eq!(to_rpn(&input), to_rpn(&input));
    }

    #[test]
    fn conversion_never_panics_on_printable_ascii(input in "[ -~]{0,64}") {
        let _ = to_rpn(&input);
    }

    #[test]
    fn successful_output_contains_only_operand_and_operator_characters(
        input in "[ -~]{0,64}"
    ) {
        if let Ok(rendered) = to_rpn(&input) {
            for ch in rendered.chars() {
                prop_assert!(
                    ch.is_ascii_alphanumeric() || OPERATOR_SYMBOLS.contains(ch),
                    "structural character {ch:?} leaked into output for {:?}",
                    input
                );
            }
        }
    }
}
