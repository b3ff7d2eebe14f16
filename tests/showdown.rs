use poker_sim::evaluator::Category;
use poker_sim::hand::Hand;
use poker_sim::showdown::{play, Winner};

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

#[test]
fn royal_flush_beats_straight_flush() {
    let royal = hand("10H JH QH KH AH");
    let sf = hand("9S 10S JS QS KS");
    let r = play(&royal, &sf);
    assert_eq!(r.winner, Winner::Hand1);
    assert_eq!(r.winning_hand(), &royal);

    let r = play(&sf, &royal);
    assert_eq!(r.winner, Winner::Hand2);
    assert_eq!(r.winning_hand(), &royal);
}

#[test]
fn full_house_beats_flush() {
    let r = play(&hand("10H JH QH KH 2H"), &hand("10S 10D 10C AS AD"));
    assert_eq!(r.winner, Winner::Hand2);
    assert_eq!(r.first.category, Category::Flush);
    assert_eq!(r.second.category, Category::FullHouse);
}

#[test]
fn two_pair_of_tens_ties_two_pair_of_nines() {
    let r = play(&hand("10H 10D JC JH KH"), &hand("9S 9C 2D 2S 4H"));
    assert_eq!(r.winner, Winner::Tie);
    assert_eq!(r.first.category, Category::TwoPair);
    assert_eq!(r.second.category, Category::TwoPair);
}

#[test]
fn results_keep_both_hands() {
    let a = hand("2C 5D 9H JS KH");
    let b = hand("AS AD 3C 4H 6S");
    let r = play(&a, &b);
    assert_eq!(r.first.hand, a);
    assert_eq!(r.second.hand, b);
    assert_eq!(r.to_string().lines().count(), 3);
}
