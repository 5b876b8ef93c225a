#![no_main]

use libfuzzer_sys::fuzz_target;
use strsafe::{removing_characters, CharSet};

fuzz_target!(|data: &[u8]| {
    let Ok(pattern) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(set) = CharSet::parse(pattern) {
        let stripped = removing_characters(pattern, &set);
        assert!(stripped.chars().all(|c| !set.contains(c)));
    }
});
