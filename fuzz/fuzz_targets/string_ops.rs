#![no_main]

use libfuzzer_sys::fuzz_target;
use strsafe::{
    clamp_to_boundary, removing_suffix, reversed_string, reversed_string_with,
    safe_substring_from_index_in, safe_substring_to_index_in, IndexUnit, ReverseMode,
};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let index = data.first().copied().unwrap_or(0) as usize;

    for unit in [IndexUnit::Chars, IndexUnit::Utf16, IndexUnit::Bytes] {
        let head = safe_substring_to_index_in(s, index, unit);
        let tail = safe_substring_from_index_in(s, index, unit);
        assert_eq!(head.len() + tail.len(), s.len());
    }

    assert_eq!(reversed_string(&reversed_string(s)), s);
    let _ = reversed_string_with(s, ReverseMode::Graphemes);

    let (rest, suffix) = s.split_at(clamp_to_boundary(s, s.len() / 2, IndexUnit::Bytes));
    assert_eq!(removing_suffix(s, suffix), rest);
});
