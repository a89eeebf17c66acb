// Copyright 2024 Chess3D developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use chess3d::{divide, perft, BoardSnapshot, MoveError, Position, PositionState, START_FEN};
use clap::{App, Arg, ArgMatches, SubCommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn main() {
    env_logger::init();
    let fen_arg = || {
        Arg::with_name("fen")
            .help("FEN string for the starting position")
            .value_name("FEN")
            .long("--fen")
            .takes_value(true)
    };

    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("show")
                .about("Print a board position, its state and its legal moves")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("json")
                        .help("Print the position as a JSON snapshot")
                        .long("--json"),
                ),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("PERFT analysis of board positions")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("-d")
                        .long("--depth")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("divide")
                        .help("Print node counts per root move")
                        .long("--divide"),
                ),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Play moves read from standard input")
                .arg(fen_arg()),
        )
        .subcommand(
            SubCommand::with_name("random")
                .about("Play random legal moves until the game ends")
                .arg(fen_arg())
                .arg(
                    Arg::with_name("plies")
                        .help("Maximum number of half-moves to play")
                        .value_name("PLIES")
                        .long("--plies")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for the move picker")
                        .value_name("SEED")
                        .long("--seed")
                        .takes_value(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("show", Some(matches)) => run_show(matches),
        ("perft", Some(matches)) => run_perft(matches),
        ("play", Some(matches)) => run_play(matches),
        ("random", Some(matches)) => run_random(matches),
        _ => {
            println!("{}", matches.usage());
            process::exit(1);
        }
    }
}

fn parse_or_exit(fen: &str) -> Position {
    match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(err) => {
            println!("invalid fen: {}", err);
            process::exit(1);
        }
    }
}

fn print_position(pos: &Position) {
    println!("{}", pos);
    println!("fen:   {}", pos.as_fen());
    println!("side:  {}", pos.side_to_move());
    println!("state: {:?}", pos.state());
}

fn run_show(matches: &ArgMatches) -> ! {
    let pos = parse_or_exit(matches.value_of("FEN").unwrap());
    if matches.is_present("json") {
        match BoardSnapshot::from_position(&pos).to_json() {
            Ok(json) => println!("{}", json),
            Err(err) => {
                println!("failed to serialize position: {}", err);
                process::exit(1);
            }
        }

        process::exit(0);
    }

    print_position(&pos);
    let notations: Vec<&str> = pos.legal_moves().iter().map(|mov| mov.notation(&pos)).collect();
    println!("moves: {}", notations.join(" "));
    process::exit(0);
}

fn run_perft(matches: &ArgMatches) -> ! {
    let fen = matches.value_of("FEN").unwrap();
    let depth = value_t_or_exit!(matches, "depth", u32);
    let pos = parse_or_exit(fen);

    println!("fen:   {}", fen);
    println!("depth: {}", depth);
    println!();
    println!("{}", pos);
    println!();
    if matches.is_present("divide") {
        let counts = divide(&pos, depth);
        for (mov, count) in &counts {
            println!("{}: {}", mov, count);
        }

        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        println!();
        println!("total: {}", total);
        process::exit(0);
    }

    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&pos, i);
        let ms = start.elapsed().as_millis();
        println!("perft({}) = {} ({} ms)", i, results, ms);
    }

    process::exit(0);
}

fn run_play(matches: &ArgMatches) -> ! {
    let mut pos = parse_or_exit(matches.value_of("fen").unwrap_or(START_FEN));
    let stdin_ref = io::stdin();
    let mut stdin = stdin_ref.lock();
    loop {
        print_position(&pos);
        if !pos.is_playable() {
            process::exit(0);
        }

        print!("{} to move> ", pos.side_to_move());
        io::stdout().flush().unwrap();

        let mut buf = String::new();
        match stdin.read_line(&mut buf) {
            Ok(0) => process::exit(0),
            Ok(_) => {}
            Err(err) => {
                println!("fatal i/o error: {}", err);
                process::exit(1);
            }
        }

        let text = buf.trim();
        match text {
            "" => continue,
            "quit" => process::exit(0),
            "moves" => {
                for mov in pos.legal_moves() {
                    println!("{} {}", mov.as_uci(), mov.notation(&pos));
                }
                continue;
            }
            _ => {}
        }

        match pos.play_uci(text) {
            Ok(next) => pos = next,
            Err(MoveError::InconsistentPosition) => {
                println!("engine produced an inconsistent position, giving up");
                process::exit(2);
            }
            Err(err) => println!("{}", err),
        }
    }
}

fn run_random(matches: &ArgMatches) -> ! {
    let mut pos = parse_or_exit(matches.value_of("fen").unwrap_or(START_FEN));
    let plies = if matches.is_present("plies") {
        value_t_or_exit!(matches, "plies", u32)
    } else {
        200
    };
    let seed = if matches.is_present("seed") {
        value_t_or_exit!(matches, "seed", u64)
    } else {
        rand::random()
    };

    println!("seed:  {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut line = Vec::new();
    for _ in 0..plies {
        if !pos.is_playable() {
            break;
        }

        let mov = match pos.legal_moves().choose(&mut rng) {
            Some(mov) => mov,
            None => break,
        };

        line.push(mov.notation(&pos).to_owned());
        pos = match pos.play(mov) {
            Ok(next) => next,
            Err(err) => {
                println!("{}", err);
                process::exit(2);
            }
        };
    }

    println!("moves: {}", line.join(" "));
    print_position(&pos);
    if pos.state() == PositionState::Invalid {
        process::exit(2);
    }

    process::exit(0);
}
