use puzzle_katas::katas::compass::compass_points;
use puzzle_katas::katas::dominoes::can_chain;
use puzzle_katas::katas::permutations::Permutations;
use puzzle_katas::katas::profit::max_profit;
use puzzle_katas::katas::ranges::compress_ranges;
use puzzle_katas::katas::shortener::UrlShortener;
use puzzle_katas::katas::zigzag::zigzag_matrix;
use std::collections::HashSet;

#[test]
fn compass_table_spans_the_rose() {
    let points = compass_points();
    assert_eq!(points.len(), 32);
    assert_eq!(points[0].abbreviation, "N");
    assert_eq!(points[0].azimuth, 0.0);
    assert_eq!(points[1].abbreviation, "NbE");
    assert_eq!(points[1].azimuth, 11.25);
    assert_eq!(points[2].abbreviation, "NNE");
    assert_eq!(points[2].azimuth, 22.5);
    assert_eq!(points[8].abbreviation, "E");
    assert_eq!(points[16].abbreviation, "S");
    assert_eq!(points[24].abbreviation, "W");
    assert_eq!(points[31].abbreviation, "NbW");
    assert_eq!(points[31].azimuth, 348.75);
}

#[test]
fn compass_abbreviations_are_unique() {
    let points = compass_points();
    let names: HashSet<&str> = points
        .iter()
        .map(|p| p.abbreviation.as_str())
        .collect::<Vec<_>>()
        .into_iter()
        .collect();
    assert_eq!(names.len(), 32);
}

#[test]
fn zigzag_reference_matrices() {
    assert_eq!(zigzag_matrix(1), vec![vec![0]]);
    assert_eq!(
        zigzag_matrix(4),
        vec![
            vec![0, 1, 5, 6],
            vec![2, 4, 7, 12],
            vec![3, 8, 11, 13],
            vec![9, 10, 14, 15],
        ]
    );
}

#[test]
fn domino_reference_examples() {
    assert!(can_chain(&[(0, 1), (1, 1)]));
    assert!(!can_chain(&[(1, 1), (2, 2), (1, 5), (5, 6), (6, 3)]));
    assert!(can_chain(&[(1, 3), (2, 3), (1, 4), (2, 4), (1, 5), (2, 5)]));
}

#[test]
fn range_reference_examples() {
    assert_eq!(compress_ranges(&[0, 1, 2, 3, 4, 5]), "0-5");
    assert_eq!(compress_ranges(&[1, 4, 5]), "1,4,5");
    assert_eq!(compress_ranges(&[0, 1, 2, 5, 7, 8, 9]), "0-2,5,7-9");
    assert_eq!(compress_ranges(&[1, 2, 4, 5]), "1,2,4,5");
}

#[test]
fn permutations_of_three_distinct_chars() {
    let all: HashSet<String> = Permutations::of("abc").collect();
    let expected: HashSet<String> = ["abc", "acb", "bac", "bca", "cab", "cba"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(all, expected);
}

#[test]
fn permutations_are_lazy() {
    // 10! permutations in total; taking a few must return promptly.
    let some: Vec<String> = Permutations::of("abcdefghij").take(5).collect();
    assert_eq!(some.len(), 5);
    assert_eq!(some[0], "abcdefghij");
}

#[test]
fn profit_reference_examples() {
    assert_eq!(max_profit(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), 15.0);
    assert_eq!(max_profit(&[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]), 0.0);
    assert_eq!(max_profit(&[1.0, 6.0, 5.0, 10.0, 8.0, 7.0]), 18.0);
}

#[test]
fn url_round_trip_and_shrink() {
    let codec = UrlShortener::new();
    let url = "https://en.wikipedia.org/wiki/URL_shortening";
    let code = codec.encode(url).unwrap();
    assert!(code.chars().count() * 2 <= url.len() + 1);
    assert_eq!(codec.decode(&code), url);
}
