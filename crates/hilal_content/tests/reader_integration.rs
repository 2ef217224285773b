//! Scrolling and searching a small verse file end to end.

use hilal_content::{MUSHAF_PAGES, PageWindow, parse_verses, search};

const FATIHA: &str = "\
# surah|ayah|text
1|1|بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ
1|2|ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ
1|3|ٱلرَّحْمَٰنِ ٱلرَّحِيمِ
1|4|مَٰلِكِ يَوْمِ ٱلدِّينِ

1|5|إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ
";

#[test]
fn search_parsed_file() {
    let verses = parse_verses(FATIHA).unwrap();
    assert_eq!(verses.len(), 5);

    let hits = search(&verses, "الرحمن الرحيم", 10);
    let ayat: Vec<u32> = hits.iter().map(|h| h.ayah).collect();
    assert_eq!(ayat, vec![1, 3]);

    // Hamza-below alef matches a bare alef query.
    let hits = search(&verses, "اياك", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ayah, 5);
    assert_eq!(verses[hits[0].index].ayah, 5);

    assert_eq!(search(&verses, "الرحيم", 1).len(), 1);
}

#[test]
fn scrolling_through_the_mushaf_only_grows_the_window() {
    let mut w = PageWindow::new(MUSHAF_PAGES, 10, 1).unwrap();
    let mut previous = w.loaded();
    for page in 1..=MUSHAF_PAGES {
        w.on_visible(page);
        let now = w.loaded();
        assert!(now.contains(&page));
        assert!(now.start <= previous.start && now.end >= previous.end);
        assert!(now.end <= MUSHAF_PAGES + 1);
        previous = now;
    }
    assert_eq!(w.loaded(), 1..MUSHAF_PAGES + 1);
}
