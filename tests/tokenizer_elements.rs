//! Tokenization tests for individual lexical elements.
//!
//! Each case is a tiny source snippet and the exact kinds it must produce, covering every
//! grammar rule and the places where rule order decides between overlapping rules.

use msxmml::mml::testing::{kinds, lex_str};
use msxmml::TokenKind::{self, *};
use rstest::rstest;

#[rstest]
#[case("#", Comment)]
#[case("# c d e: not notes", Comment)]
#[case("<-", SendArrow)]
#[case("loop:", LoopTag)]
#[case("LOOP :", LoopTag)]
#[case("{", OpenKey)]
#[case("}4", CloseTuple)]
#[case("}", CloseKey)]
#[case("adsr:1->2,3->4,5,6", AdsrVector)]
#[case("ADSR : 0 -> 100 , 5 -> 50 , 200 , 10", AdsrVector)]
#[case("wave:square", MapEntry)]
#[case("tempo : 120", MapEntry)]
#[case("||", Separator)]
#[case("$theme", ConstName)]
#[case(":=", Assign)]
#[case("@ch1", ChannelId)]
#[case("--", ChannelSync)]
#[case("-----", ChannelSync)]
#[case("c", Note)]
#[case("A#16..", Note)]
#[case("e-", Note)]
#[case("r", Silence)]
#[case("R32", Silence)]
#[case("o4", Octave)]
#[case("<", OctaveStep)]
#[case(">", OctaveStep)]
#[case("120", Number)]
#[case("hello", AnyString)]
#[case("%", AnyString)]
#[case("@", AnyString)]
fn test_single_token(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = lex_str(source);
    assert_eq!(tokens.len(), 1, "{:?} produced {:?}", source, tokens);
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].text, source);
    assert_eq!((tokens[0].row, tokens[0].col), (1, 1));
}

#[rstest]
#[case::map_entry_beats_note("a:b", vec![MapEntry])]
#[case::adsr_beats_map_entry("adsr:1->2,3->4,5,6", vec![AdsrVector])]
#[case::short_adsr_is_a_map_entry("adsr:1", vec![MapEntry])]
#[case::assign_without_value("c:=d", vec![Note, Assign, Note])]
#[case::send_arrow_beats_octave_step("<->", vec![SendArrow, OctaveStep])]
#[case::close_tuple_beats_close_key("}}3", vec![CloseKey, CloseTuple])]
#[case::channel_sync_then_note("----c", vec![ChannelSync, Note])]
#[case::flat_then_dash("c--", vec![Note, AnyString])]
#[case::loop_tag_then_note("loop:c", vec![LoopTag, Note])]
#[case::letters_are_notes("ab", vec![Note, Note])]
#[case::words_split_into_tablature("rest", vec![Silence, Note, AnyString])]
#[case::octave_is_one_digit("o45", vec![Octave, Number])]
#[case::comment_hides_structure("c # @ch1 {", vec![Note, Comment])]
fn test_priority(#[case] source: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(source), expected);
}

#[rstest]
#[case("C4 D4 E2", vec![(1, 1), (1, 4), (1, 7)])]
#[case("\t\tC4", vec![(1, 3)])]
#[case("c\nd\n\ne", vec![(1, 1), (2, 1), (4, 1)])]
#[case("  @ch1 <- $a\n{ c }2", vec![(1, 3), (1, 8), (1, 11), (2, 1), (2, 3), (2, 5)])]
fn test_positions(#[case] source: &str, #[case] expected: Vec<(usize, usize)>) {
    let positions: Vec<(usize, usize)> = lex_str(source).iter().map(|t| (t.row, t.col)).collect();
    assert_eq!(positions, expected);
}

#[test]
fn test_final_line_without_newline() {
    let with = lex_str("c d\ne\n");
    let without = lex_str("c d\ne");
    assert_eq!(with, without);
}
