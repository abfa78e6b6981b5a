//! Match driver: one game between two seats.
//!
//! A [`Match`] owns the authoritative board for a single game. It applies
//! human moves, asks the engine for computer moves, and handles draw
//! offers. Rendering and persistence belong to whoever drives it.

use noughts_core::{
    Board, DecisionError, Difficulty, Engine, Invariant, MarkBalance, Move, MoveError, Outcome,
    Player, Position, apply, evaluate,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the board.
    PlayerVsPlayer,
    /// A human (X) against the engine (O).
    PlayerVsComputer(Difficulty),
}

impl GameMode {
    /// Key under which results for this mode are tallied.
    pub fn score_key(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "pvp",
            GameMode::PlayerVsComputer(Difficulty::Easy) => "pve_easy",
            GameMode::PlayerVsComputer(Difficulty::Medium) => "pve_medium",
            GameMode::PlayerVsComputer(Difficulty::Hard) => "pve_hard",
        }
    }

    /// Engine difficulty, if the engine plays.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer(difficulty) => Some(*difficulty),
        }
    }
}

/// A seat at the table: player 1 or player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player 1 (the human in player-vs-computer).
    First,
    /// Player 2 (the computer in player-vs-computer).
    Second,
}

impl Seat {
    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Result of a finished match from player 1's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// Player 1 won.
    Win,
    /// Player 2 won.
    Loss,
    /// Nobody won, by full board or by agreement.
    Draw,
}

/// A request the match cannot honor.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum MatchError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A human tried to move while the computer is on turn.
    #[display("It's the computer's turn")]
    ComputerToMove,

    /// The computer was asked to move out of turn or in a two-player game.
    #[display("It's not the computer's turn")]
    NotComputerTurn,

    /// A move was attempted while a draw offer awaits an answer.
    #[display("A draw offer from {} is pending", _0)]
    DrawOfferPending(Player),

    /// Draw offers exist only in two-player games, one at a time.
    #[display("A draw cannot be offered now")]
    DrawOfferUnavailable,

    /// There is no draw offer to answer.
    #[display("No draw offer to respond to")]
    NoDrawOffer,

    /// The board model rejected the move.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// The engine could not produce a move.
    #[display("Engine failure: {}", _0)]
    Decision(DecisionError),
}

impl std::error::Error for MatchError {}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        Self::InvalidMove(err)
    }
}

impl From<DecisionError> for MatchError {
    fn from(err: DecisionError) -> Self {
        Self::Decision(err)
    }
}

/// One game in progress or finished.
#[derive(Debug, Clone)]
pub struct Match {
    mode: GameMode,
    board: Board,
    to_move: Player,
    history: Vec<Move>,
    x_seat: Seat,
    draw_offer: Option<Player>,
    agreed_draw: bool,
}

impl Match {
    /// Starts a match.
    ///
    /// `games_played` counts earlier games between the same players. In
    /// two-player mode the seat holding X alternates with it; against the
    /// computer the human always plays X. X always moves first.
    #[instrument]
    pub fn new(mode: GameMode, games_played: u32) -> Self {
        let x_seat = match mode {
            GameMode::PlayerVsPlayer if games_played % 2 == 1 => Seat::Second,
            _ => Seat::First,
        };
        info!(score_key = mode.score_key(), ?x_seat, "Starting match");
        Self {
            mode,
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
            x_seat,
            draw_offer: None,
            agreed_draw: false,
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns a snapshot of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the player on turn.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the pending draw offer, if any.
    pub fn draw_offer(&self) -> Option<Player> {
        self.draw_offer
    }

    /// Seat playing the given mark.
    pub fn seat_of(&self, player: Player) -> Seat {
        match player {
            Player::X => self.x_seat,
            Player::O => self.x_seat.other(),
        }
    }

    /// Mark played from the given seat.
    pub fn player_at(&self, seat: Seat) -> Player {
        if seat == self.x_seat { Player::X } else { Player::O }
    }

    /// Mark played by the engine, if it plays.
    pub fn computer_player(&self) -> Option<Player> {
        self.mode.difficulty().map(|_| Player::O)
    }

    /// Current outcome, derived from the board unless a draw was agreed.
    pub fn outcome(&self) -> Outcome {
        if self.agreed_draw {
            Outcome::Draw
        } else {
            evaluate(&self.board)
        }
    }

    /// True once the match has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Result for player 1, once the match is over.
    pub fn result(&self) -> Option<MatchResult> {
        match self.outcome() {
            Outcome::InProgress => None,
            Outcome::Draw => Some(MatchResult::Draw),
            Outcome::Win(winner) => Some(match self.seat_of(winner) {
                Seat::First => MatchResult::Win,
                Seat::Second => MatchResult::Loss,
            }),
        }
    }

    /// Plays a human move for the player on turn.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, if the computer is on turn, if a draw
    /// offer is pending, or if the square is taken.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MatchError> {
        if self.computer_player() == Some(self.to_move) && !self.is_over() {
            warn!("Human move attempted on the computer's turn");
            return Err(MatchError::ComputerToMove);
        }
        self.place(position)
    }

    /// Asks the engine for a move and plays it.
    ///
    /// # Errors
    ///
    /// [`MatchError::NotComputerTurn`] in two-player mode or when the
    /// human is on turn; engine failures are passed through.
    #[instrument(skip(self, engine, rng), fields(to_move = %self.to_move))]
    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        engine: &Engine,
        rng: &mut R,
    ) -> Result<(Position, Outcome), MatchError> {
        self.ensure_open()?;
        let difficulty = self.mode.difficulty().ok_or(MatchError::NotComputerTurn)?;
        if self.computer_player() != Some(self.to_move) {
            return Err(MatchError::NotComputerTurn);
        }

        let position = engine
            .decide(&self.board, difficulty, self.to_move, rng)
            .inspect_err(|err| error!(%err, "Engine refused to move"))?;
        let outcome = self.place(position)?;
        Ok((position, outcome))
    }

    /// Offers a draw on behalf of the player on turn.
    ///
    /// # Errors
    ///
    /// [`MatchError::DrawOfferUnavailable`] against the computer, while
    /// another offer is pending, or after the game has ended.
    #[instrument(skip(self))]
    pub fn offer_draw(&mut self) -> Result<Player, MatchError> {
        if self.mode != GameMode::PlayerVsPlayer || self.draw_offer.is_some() || self.is_over() {
            return Err(MatchError::DrawOfferUnavailable);
        }
        info!(from = %self.to_move, "Draw offered");
        self.draw_offer = Some(self.to_move);
        Ok(self.to_move)
    }

    /// Answers the pending draw offer.
    ///
    /// Accepting ends the game as a draw; declining resumes play.
    #[instrument(skip(self))]
    pub fn respond_to_draw(&mut self, accept: bool) -> Result<Outcome, MatchError> {
        let from = self.draw_offer.take().ok_or(MatchError::NoDrawOffer)?;
        if accept {
            info!(%from, "Draw agreed");
            self.agreed_draw = true;
        } else {
            info!(%from, "Draw declined");
        }
        Ok(self.outcome())
    }

    fn ensure_open(&self) -> Result<(), MatchError> {
        if self.is_over() {
            return Err(MatchError::GameOver);
        }
        if let Some(from) = self.draw_offer {
            return Err(MatchError::DrawOfferPending(from));
        }
        Ok(())
    }

    fn place(&mut self, position: Position) -> Result<Outcome, MatchError> {
        self.ensure_open()?;

        let player = self.to_move;
        self.board = apply(&self.board, position, player)?;
        self.history.push(Move::new(player, position));
        debug_assert!(MarkBalance::holds(&self.board), "{}", MarkBalance::description());

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Match finished");
        } else {
            self.to_move = player.opponent();
            debug_assert_eq!(self.to_move, MarkBalance::to_move(&self.board));
        }
        debug!(%player, %position, %outcome, "Move applied");
        Ok(outcome)
    }
}

/// Plays one engine-against-engine game.
///
/// Runs as a two-player match with X in seat 1, so
/// [`Match::result`] reads from X's side.
#[instrument(skip(engine, rng))]
pub fn self_play<R: Rng + ?Sized>(
    engine: &Engine,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<Match, MatchError> {
    let mut game = Match::new(GameMode::PlayerVsPlayer, 0);
    while !game.is_over() {
        let player = game.to_move();
        let difficulty = match player {
            Player::X => x,
            Player::O => o,
        };
        let position = engine.decide(&game.board(), difficulty, player, rng)?;
        game.play(position)?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pvp_alternates_x_seat() {
        let even = Match::new(GameMode::PlayerVsPlayer, 2);
        let odd = Match::new(GameMode::PlayerVsPlayer, 3);
        assert_eq!(even.seat_of(Player::X), Seat::First);
        assert_eq!(odd.seat_of(Player::X), Seat::Second);
        assert_eq!(odd.player_at(Seat::First), Player::O);
        assert_eq!(odd.to_move(), Player::X);
    }

    #[test]
    fn test_pve_human_is_always_x() {
        let game = Match::new(GameMode::PlayerVsComputer(Difficulty::Hard), 5);
        assert_eq!(game.seat_of(Player::X), Seat::First);
        assert_eq!(game.computer_player(), Some(Player::O));
    }

    #[test]
    fn test_score_keys() {
        assert_eq!(GameMode::PlayerVsPlayer.score_key(), "pvp");
        assert_eq!(
            GameMode::PlayerVsComputer(Difficulty::Medium).score_key(),
            "pve_medium"
        );
    }

    #[test]
    fn test_pve_turns_are_enforced() {
        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Match::new(GameMode::PlayerVsComputer(Difficulty::Hard), 0);

        assert_eq!(
            game.computer_move(&engine, &mut rng),
            Err(MatchError::NotComputerTurn)
        );
        game.play(Position::Center).unwrap();
        assert_eq!(game.play(Position::TopLeft), Err(MatchError::ComputerToMove));

        let (position, outcome) = game.computer_move(&engine, &mut rng).unwrap();
        assert_ne!(position, Position::Center);
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_square_is_recoverable() {
        let mut game = Match::new(GameMode::PlayerVsPlayer, 0);
        game.play(Position::Center).unwrap();
        assert_eq!(
            game.play(Position::Center),
            Err(MatchError::InvalidMove(MoveError::SquareOccupied(Position::Center)))
        );
        assert_eq!(game.to_move(), Player::O);
        game.play(Position::TopLeft).unwrap();
    }

    #[test]
    fn test_draw_offer_accepted_ends_game() {
        let mut game = Match::new(GameMode::PlayerVsPlayer, 0);
        game.play(Position::Center).unwrap();
        assert_eq!(game.offer_draw(), Ok(Player::O));
        assert_eq!(
            game.play(Position::TopLeft),
            Err(MatchError::DrawOfferPending(Player::O))
        );
        assert_eq!(game.offer_draw(), Err(MatchError::DrawOfferUnavailable));

        assert_eq!(game.respond_to_draw(true), Ok(Outcome::Draw));
        assert_eq!(game.result(), Some(MatchResult::Draw));
        assert_eq!(game.play(Position::TopLeft), Err(MatchError::GameOver));
    }

    #[test]
    fn test_draw_offer_declined_resumes_play() {
        let mut game = Match::new(GameMode::PlayerVsPlayer, 0);
        game.offer_draw().unwrap();
        assert_eq!(game.respond_to_draw(false), Ok(Outcome::InProgress));
        assert_eq!(game.respond_to_draw(false), Err(MatchError::NoDrawOffer));
        game.play(Position::TopLeft).unwrap();
    }

    #[test]
    fn test_no_draw_offer_against_computer() {
        let mut game = Match::new(GameMode::PlayerVsComputer(Difficulty::Easy), 0);
        assert_eq!(game.offer_draw(), Err(MatchError::DrawOfferUnavailable));
    }

    #[test]
    fn test_result_follows_seat_of_winner() {
        // Game 1: player 2 holds X.
        let mut game = Match::new(GameMode::PlayerVsPlayer, 1);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
        assert_eq!(game.result(), Some(MatchResult::Loss));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_hard_self_play_draws() {
        let mut rng = StdRng::seed_from_u64(8);
        let game =
            self_play(&Engine::default(), Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.history().len(), 9);
    }
}
