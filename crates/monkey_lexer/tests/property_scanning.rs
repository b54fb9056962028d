use monkey_lexer::Scanner;
use monkey_tokens::TokenKind;
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 256;

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

proptest! {
    #[test]
    fn scanning_arbitrary_bytes_terminates(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let mut scanner = Scanner::from_bytes(&bytes);
        let mut finished = false;

        // every token consumes at least one byte, so one more call than there are bytes must reach EOF
        for _ in 0..=bytes.len() {
            if scanner.next_token().kind() == TokenKind::Eof {
                finished = true;
                break;
            }
        }

        prop_assert!(finished, "scanner did not reach EOF for {} bytes", bytes.len());
        prop_assert_eq!(scanner.next_token().kind(), TokenKind::Eof);
    }

    #[test]
    fn every_byte_is_accounted_for(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let literal_bytes: usize = Scanner::from_bytes(&bytes)
            .map(|token| token.literal().chars().count())
            .sum();
        let whitespace = bytes.iter().filter(|&&byte| is_whitespace(byte)).count();

        prop_assert_eq!(literal_bytes + whitespace, bytes.len());
    }

    #[test]
    fn whitespace_only_input_is_eof(
        input in "[ \t\r\n]{0,64}"
    ) {
        let mut scanner = Scanner::new(&input);
        prop_assert_eq!(scanner.next_token().kind(), TokenKind::Eof);
    }

    #[test]
    fn digit_runs_are_one_integer(
        digits in "[0-9]{1,32}",
        suffix in "[^0-9]?"
    ) {
        let input = format!("{digits}{suffix}");
        let mut scanner = Scanner::new(&input);
        let token = scanner.next_token();
        prop_assert_eq!(token.kind(), TokenKind::Int);
        prop_assert_eq!(token.literal(), digits.as_str());
    }

    #[test]
    fn letter_runs_are_one_word(
        word in "[a-zA-Z_]{1,32}"
    ) {
        let tokens = Scanner::new(&word).collect::<Vec<_>>();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].literal(), word.as_str());
        prop_assert!(tokens[0].kind() == TokenKind::Ident || tokens[0].kind().is_keyword());
    }
}
