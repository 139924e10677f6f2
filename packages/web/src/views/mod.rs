mod login;
pub use login::Login;

mod start;
pub use start::Start;

mod game;
pub use game::Game;

mod highscores;
pub use highscores::Highscores;
