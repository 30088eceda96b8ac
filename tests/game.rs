//! Game integration tests.
//!
//! All packs here are fixed, so every transcript is fully deterministic
//! and can be asserted verbatim.

use euchre::{Game, GameOptions, GameWinner, Pack, Player, PlayerType, Team, new_player};

fn players() -> Vec<Box<dyn Player>> {
    ["North", "East", "South", "West"]
        .iter()
        .map(|&name| new_player(name, PlayerType::Simple))
        .collect()
}

fn play_to_string(pack: Pack, options: GameOptions) -> (String, GameWinner) {
    let mut game = Game::new(pack, options, players());
    let mut out = Vec::new();
    let winner = game.play(&mut out).expect("in-memory game succeeds");
    (
        String::from_utf8(out).expect("announcements are UTF-8"),
        winner,
    )
}

/// The first hand of a default-order pack, played out by hand. Seat 0
/// deals, the jack of diamonds turns up, everyone passes on diamonds,
/// and East holds the king and ace of hearts for the second round.
const STANDARD_PACK_TRANSCRIPT: &str = "Hand 0
North deals
Jack of Diamonds turned up
East passes
South passes
West passes
North passes
East orders up Hearts

Jack of Spades led by East
King of Spades played by South
Ace of Spades played by West
Nine of Diamonds played by North
West takes the trick

King of Clubs led by West
Ace of Clubs played by North
Nine of Spades played by East
Jack of Clubs played by South
North takes the trick

Ten of Diamonds led by North
Ten of Spades played by East
Nine of Clubs played by South
Nine of Hearts played by West
West takes the trick

Queen of Clubs led by West
Jack of Hearts played by North
King of Hearts played by East
Ten of Clubs played by South
North takes the trick

Queen of Hearts led by North
Ace of Hearts played by East
Queen of Spades played by South
Ten of Hearts played by West
East takes the trick

East and West win the hand
North and South have 0 points
East and West have 1 points

East and West win!
";

/// Deals East the top five hearts (both bowers down to the queen) with
/// the nine of hearts turned up: an immediate order-up and a march.
const MARCH_PACK: &str = "Jack of Hearts
Jack of Diamonds
Ace of Hearts
Nine of Spades
Ten of Spades
Ace of Spades
Nine of Clubs
Ten of Clubs
King of Clubs
Ace of Clubs
King of Hearts
Queen of Hearts
Jack of Spades
Queen of Spades
King of Spades
Jack of Clubs
Queen of Clubs
Nine of Diamonds
Ten of Diamonds
Ten of Hearts
Nine of Hearts
Queen of Diamonds
King of Diamonds
Ace of Diamonds
";

/// East orders up spades on two face cards while South sits on both
/// bowers and three aces: the makers never take a trick.
const EUCHRE_PACK: &str = "Queen of Spades
King of Spades
Nine of Hearts
Jack of Spades
Jack of Clubs
Nine of Clubs
Ten of Clubs
Queen of Clubs
King of Hearts
Queen of Hearts
Nine of Diamonds
Ten of Diamonds
Ace of Spades
Ace of Hearts
Ace of Diamonds
King of Clubs
Ten of Hearts
Jack of Hearts
Jack of Diamonds
Queen of Diamonds
Nine of Spades
Ten of Spades
King of Diamonds
Ace of Clubs
";

#[test]
fn standard_pack_without_shuffling_plays_a_known_hand() {
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_points_to_win(1);
    let (transcript, winner) = play_to_string(Pack::new(), options);

    assert_eq!(transcript, STANDARD_PACK_TRANSCRIPT);
    assert_eq!(winner.team, Team::OddSeats);
    assert_eq!(winner.points, 1);
}

#[test]
fn identical_runs_produce_identical_transcripts() {
    let options = GameOptions::default().with_points_to_win(3);
    let (first, first_winner) = play_to_string(Pack::new(), options);
    let (second, second_winner) = play_to_string(Pack::new(), options);

    assert_eq!(first, second);
    assert_eq!(first_winner, second_winner);
}

#[test]
fn shuffling_turns_up_a_different_card_deterministically() {
    let options = GameOptions::default()
        .with_shuffle(true)
        .with_points_to_win(1);
    let (transcript, winner) = play_to_string(Pack::new(), options);

    assert!(transcript.contains("Nine of Hearts turned up"));
    assert!(transcript.contains("East orders up Hearts"));
    assert!(transcript.contains("euchred!"));
    assert_eq!(winner.team, Team::EvenSeats);
    assert_eq!(winner.points, 2);
}

#[test]
fn taking_all_five_tricks_scores_a_march() {
    let pack = Pack::from_reader(MARCH_PACK.as_bytes()).expect("fixture pack parses");
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_points_to_win(2);
    let (transcript, winner) = play_to_string(pack, options);

    assert!(transcript.contains("East orders up Hearts"));
    assert!(transcript.contains("march!"));
    assert_eq!(transcript.matches("East takes the trick").count(), 5);
    assert_eq!(winner.team, Team::OddSeats);
    assert_eq!(winner.points, 2);
}

#[test]
fn makers_taking_under_three_tricks_are_euchred() {
    let pack = Pack::from_reader(EUCHRE_PACK.as_bytes()).expect("fixture pack parses");
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_points_to_win(2);
    let (transcript, winner) = play_to_string(pack, options);

    assert!(transcript.contains("East orders up Spades"));
    assert!(transcript.contains("euchred!"));
    assert_eq!(transcript.matches("South takes the trick").count(), 5);
    assert_eq!(winner.team, Team::EvenSeats);
    assert_eq!(winner.points, 2);
}

#[test]
fn longer_games_accumulate_points_across_hands() {
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_points_to_win(3);
    let (transcript, winner) = play_to_string(Pack::new(), options);

    // The dealer rotates between hands, so the same pack order deals
    // different hands; the odd seats reach three points on the fifth.
    assert!(transcript.contains("Hand 4"));
    assert!(!transcript.contains("Hand 5"));
    assert_eq!(winner.team, Team::OddSeats);
    assert_eq!(winner.points, 3);
}

#[test]
#[should_panic(expected = "exactly four players")]
fn a_game_requires_exactly_four_players() {
    let short: Vec<Box<dyn Player>> = vec![
        new_player("North", PlayerType::Simple),
        new_player("East", PlayerType::Simple),
    ];
    let _ = Game::new(Pack::new(), GameOptions::default(), short);
}
