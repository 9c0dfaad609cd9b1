/*!
 * Tests for timecode parsing and ordering
 */

use std::time::Duration;
use assdiff::timecode::Timecode;

#[test]
fn test_parse_withEquivalentSeparators_shouldBeEqual() {
    assert_eq!(Timecode::parse("1:02:03.04"), Timecode::parse("1.02.03,04"));
    assert_eq!(Timecode::parse("1:02:03.04").elapsed(), Duration::from_secs(3723));
}

#[test]
fn test_parse_withGarbage_shouldEqualZero() {
    for input in ["garbage", "", "   ", "::", "-1:00:00", "0:00:61.00"] {
        assert_eq!(Timecode::parse(input), Timecode::zero(), "input {:?}", input);
    }
}

#[test]
fn test_parse_withSurroundingWhitespace_shouldTrim() {
    let tc = Timecode::parse("  0:00:05.00 ");
    assert_eq!(tc.text(), "0:00:05.00");
    assert_eq!(tc.elapsed(), Duration::from_secs(5));
}

#[test]
fn test_parse_withExtraFields_shouldTruncateThem() {
    assert_eq!(Timecode::parse("0:01:02.50.99"), Timecode::parse("0:01:02"));
    assert_eq!(Timecode::parse("1:2:3:x").elapsed(), Duration::from_secs(3723));
}

#[test]
fn test_tryParse_shouldDistinguishZeroFromInvalid() {
    assert_eq!(Timecode::try_parse("0:00:00.00"), Some(Duration::ZERO));
    assert_eq!(Timecode::try_parse("soon"), None);
}

#[test]
fn test_ordering_shouldBeTotal() {
    let mut timecodes: Vec<Timecode> = ["0:00:10.00", "garbage", "0:00:02.00", "1:00:00.00", "00:30"]
        .iter()
        .map(|text| Timecode::parse(text))
        .collect();
    timecodes.sort();

    let texts: Vec<&str> = timecodes.iter().map(|tc| tc.text()).collect();
    assert_eq!(texts, vec!["garbage", "0:00:02.00", "0:00:10.00", "00:30", "1:00:00.00"]);
}
