use game::Game;

fn main() {
    let mut game = Game::new();
    if let Err(err) = terminal_ui::run(&mut game) {
        eprintln!("error reading terminal input: {err}");
        std::process::exit(1);
    }
}
