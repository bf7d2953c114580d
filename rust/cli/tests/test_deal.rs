mod helpers;

use helpers::run_cli;

#[test]
fn deal_three_handed_shows_blinds_and_first_actor() {
    let res = run_cli(&["deal", "--seed", "42", "--players", "3"], "");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(lines[0], "Seed: 42");
    assert_eq!(lines[1], "Blinds: SB=5 BB=10");
    assert!(lines[2].starts_with("Seat 0 P1 [BTN]:"));
    assert!(lines[3].starts_with("Seat 1 P2 [SB]:") && lines[3].ends_with("stack=995 bet=5"));
    assert!(lines[4].starts_with("Seat 2 P3 [BB]:") && lines[4].ends_with("stack=990 bet=10"));
    assert_eq!(lines[5], "Pot: 15");
    assert_eq!(lines[6], "To act: seat 0");
}

#[test]
fn deal_heads_up_button_posts_big_blind() {
    let res = run_cli(&["deal", "--seed", "42", "--players", "2"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Seat 0 P1 [BB]:"), "{}", res.stdout);
    assert!(res.stdout.contains("Seat 1 P2 [SB]:"), "{}", res.stdout);
    assert!(res.stdout.contains("To act: seat 1"));
}

#[test]
fn deal_same_seed_same_cards() {
    let a = run_cli(&["deal", "--seed", "2024", "--players", "6"], "");
    let b = run_cli(&["deal", "--seed", "2024", "--players", "6"], "");
    assert_eq!(a.stdout, b.stdout);

    let c = run_cli(&["deal", "--seed", "2025", "--players", "6"], "");
    assert_ne!(a.stdout, c.stdout);
}

#[test]
fn deal_rejects_out_of_range_players() {
    let res = run_cli(&["deal", "--players", "11"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("players must be 2-10"), "{}", res.stderr);
    assert!(res.stdout.is_empty());
}
