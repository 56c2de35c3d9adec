//! The session state machine driving the daily reporting ritual.
//!
//! A session moves between two screens. On the missions list the player
//! creates, deletes, and selects missions; on the game screen the reporting
//! flow runs: open the progress choice, pick an outcome, roll the weighted
//! die, apply the move. Each step is a synchronous transition guarded by
//! explicit preconditions, so the whole flow is testable without timers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use ql_core::{Mission, MissionIcon, MissionId};
use ql_mechanics::{RollMode, StreakTracker};

use crate::error::{SessionError, SessionResult};

/// Which screen the frontend should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// The mission list and creation form.
    #[default]
    MissionsList,
    /// The board view for the selected mission.
    Game,
}

/// Transient prompt and roll state for one reporting cycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct FlowState {
    choice_open: bool,
    dice_open: bool,
    mode: RollMode,
    last_roll: Option<u32>,
}

/// The result of applying a roll (or manual move) to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Position before the move.
    pub from: u32,
    /// Position after the move, clamped to the mission length.
    pub to: u32,
    /// Steps actually taken; steps past the final tile are absorbed.
    pub steps_taken: u32,
    /// True if the move reached the final tile.
    pub completed: bool,
}

/// A single player's game session: screen navigation, the mission
/// collection, and the reporting flow.
///
/// The selected mission is held as an id into the collection, never as a
/// copy, so every read observes the canonical entry.
#[derive(Debug)]
pub struct GameSession {
    screen: Screen,
    missions: Vec<Mission>,
    selected: Option<MissionId>,
    position: u32,
    streaks: StreakTracker,
    flow: FlowState,
    rng: StdRng,
}

impl GameSession {
    /// Create an empty session with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            screen: Screen::default(),
            missions: Vec::new(),
            selected: None,
            position: 0,
            streaks: StreakTracker::new(),
            flow: FlowState::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a session pre-populated with the demo missions.
    pub fn with_samples(seed: u64) -> Self {
        let mut session = Self::new(seed);
        session.missions = Mission::samples();
        session
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    /// The screen the frontend should be showing.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// All missions in creation order.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// The selected mission, resolved against the collection.
    pub fn selected_mission(&self) -> Option<&Mission> {
        self.selected
            .and_then(|id| self.missions.iter().find(|m| m.id == id))
    }

    /// The player's position on the board, mirroring the selected
    /// mission's current day.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// The streak counters.
    pub fn streaks(&self) -> &StreakTracker {
        &self.streaks
    }

    /// Whether the progress-choice prompt is open.
    pub fn choice_open(&self) -> bool {
        self.flow.choice_open
    }

    /// Whether the dice prompt is open.
    pub fn dice_open(&self) -> bool {
        self.flow.dice_open
    }

    /// The dice weighting chosen by the last progress choice.
    pub fn roll_mode(&self) -> RollMode {
        self.flow.mode
    }

    /// The most recent roll, kept for result display until the next
    /// choice or until the player leaves the game screen.
    pub fn last_roll(&self) -> Option<u32> {
        self.flow.last_roll
    }

    // -----------------------------------------------------------------------
    // Mission management
    // -----------------------------------------------------------------------

    /// Add a mission to the collection. Returns its id.
    pub fn add_mission(&mut self, mission: Mission) -> MissionId {
        let id = mission.id;
        self.missions.push(mission);
        id
    }

    /// Create a mission from the creation form input and add it.
    ///
    /// The title is trimmed and must be non-empty; all other fields take
    /// the form defaults.
    pub fn create_mission(&mut self, title: &str, icon: MissionIcon) -> SessionResult<MissionId> {
        let mission = Mission::new(title, icon)?;
        Ok(self.add_mission(mission))
    }

    /// Select a mission and enter the game screen. The board position
    /// picks up the mission's current day.
    pub fn select_mission(&mut self, id: MissionId) -> SessionResult<()> {
        let mission = self
            .missions
            .iter()
            .find(|m| m.id == id)
            .ok_or(SessionError::MissionNotFound(id))?;
        self.position = mission.current_day();
        self.selected = Some(id);
        self.screen = Screen::Game;
        Ok(())
    }

    /// Return to the missions list, clearing the selection, any open
    /// prompts, and the last roll result, whatever state they were in.
    pub fn go_back(&mut self) {
        self.screen = Screen::MissionsList;
        self.selected = None;
        self.flow = FlowState::default();
    }

    /// Delete a mission. Clears the selection if it pointed at the
    /// removed mission.
    pub fn delete_mission(&mut self, id: MissionId) -> SessionResult<Mission> {
        let index = self
            .missions
            .iter()
            .position(|m| m.id == id)
            .ok_or(SessionError::MissionNotFound(id))?;
        let mission = self.missions.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(mission)
    }

    // -----------------------------------------------------------------------
    // Reporting flow
    // -----------------------------------------------------------------------

    /// Open the progress-choice prompt for the selected mission.
    pub fn report_progress(&mut self) -> SessionResult<()> {
        if self.selected_mission().is_none() {
            return Err(SessionError::NoActiveMission);
        }
        if self.flow.choice_open || self.flow.dice_open {
            return Err(SessionError::PromptAlreadyOpen);
        }
        self.flow.choice_open = true;
        Ok(())
    }

    /// Answer the progress choice: `made_it` selects the dice weighting.
    /// Closes the choice prompt and opens the dice prompt with no residual
    /// roll result.
    pub fn handle_progress_choice(&mut self, made_it: bool) -> SessionResult<RollMode> {
        if !self.flow.choice_open {
            return Err(SessionError::ChoiceNotPending);
        }
        self.flow.choice_open = false;
        self.flow.mode = if made_it {
            RollMode::Success
        } else {
            RollMode::Failure
        };
        self.flow.last_roll = None;
        self.flow.dice_open = true;
        Ok(self.flow.mode)
    }

    /// Roll the die for the open dice prompt and record the result. The
    /// prompt stays open so the frontend can show the face before the
    /// move is applied.
    pub fn roll_dice(&mut self) -> SessionResult<u32> {
        if !self.flow.dice_open {
            return Err(SessionError::RollNotPending);
        }
        if self.flow.last_roll.is_some() {
            return Err(SessionError::AlreadyRolled);
        }
        let value = self.flow.mode.roll(&mut self.rng);
        self.flow.last_roll = Some(value);
        Ok(value)
    }

    /// Apply the recorded roll: move the player, sync the mission, update
    /// the streaks, close the dice prompt. Closing the prompt makes a
    /// second application unreachable, so the streak update runs exactly
    /// once per cycle.
    pub fn complete_roll(&mut self) -> SessionResult<MoveReport> {
        if !self.flow.dice_open {
            return Err(SessionError::RollNotPending);
        }
        let steps = self.flow.last_roll.ok_or(SessionError::RollNotPending)?;
        let report = self.move_player(steps)?;
        match self.flow.mode {
            RollMode::Success => self.streaks.record_success(),
            RollMode::Failure => self.streaks.record_failure(),
        }
        self.flow.dice_open = false;
        Ok(report)
    }

    /// Advance the player marker by `steps` in one atomic update, clamped
    /// to the mission length, and write the new position back into the
    /// mission's collection entry.
    pub fn move_player(&mut self, steps: u32) -> SessionResult<MoveReport> {
        let id = self.selected.ok_or(SessionError::NoActiveMission)?;
        let mission = self
            .missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(SessionError::MissionNotFound(id))?;
        let from = self.position;
        let to = (from + steps).min(mission.days_total());
        self.position = to;
        mission.set_current_day(to);
        Ok(MoveReport {
            from,
            to,
            steps_taken: to - from,
            completed: to == mission.days_total(),
        })
    }

    /// Restart the selected mission: marker to the start tile, mission
    /// progress to zero, current streak cleared. Lifetime streak counters
    /// survive.
    pub fn reset_game(&mut self) -> SessionResult<()> {
        let id = self.selected.ok_or(SessionError::NoActiveMission)?;
        let mission = self
            .missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(SessionError::MissionNotFound(id))?;
        mission.reset_progress();
        self.position = 0;
        self.streaks.reset_current();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ql_core::CoreError;

    fn session_with_mission() -> (GameSession, MissionId) {
        let mut session = GameSession::new(42);
        let id = session
            .create_mission("Run 5k", MissionIcon::Run)
            .unwrap();
        (session, id)
    }

    /// Drive one full report-roll-move cycle and return the move report.
    fn run_cycle(session: &mut GameSession, made_it: bool) -> MoveReport {
        session.report_progress().unwrap();
        session.handle_progress_choice(made_it).unwrap();
        session.roll_dice().unwrap();
        session.complete_roll().unwrap()
    }

    #[test]
    fn new_session_is_empty() {
        let session = GameSession::new(1);
        assert_eq!(session.screen(), Screen::MissionsList);
        assert!(session.missions().is_empty());
        assert!(session.selected_mission().is_none());
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn with_samples_populates_demo_missions() {
        let session = GameSession::with_samples(1);
        assert_eq!(session.missions().len(), 5);
        assert_eq!(session.screen(), Screen::MissionsList);
    }

    #[test]
    fn create_mission_trims_title() {
        let mut session = GameSession::new(1);
        let id = session
            .create_mission("  Run 5k ", MissionIcon::Run)
            .unwrap();
        let mission = session.missions().iter().find(|m| m.id == id).unwrap();
        assert_eq!(mission.title, "Run 5k");
    }

    #[test]
    fn create_mission_rejects_whitespace_title() {
        let mut session = GameSession::new(1);
        assert_eq!(
            session.create_mission("  ", MissionIcon::Target).unwrap_err(),
            SessionError::Invalid(CoreError::EmptyTitle)
        );
        assert!(session.missions().is_empty());
    }

    #[test]
    fn select_mission_enters_game_at_current_day() {
        let mut session = GameSession::with_samples(1);
        let id = session.missions()[1].id; // Read 20 Pages, day 12
        session.select_mission(id).unwrap();
        assert_eq!(session.screen(), Screen::Game);
        assert_eq!(session.position(), 12);
        assert_eq!(session.selected_mission().unwrap().id, id);
    }

    #[test]
    fn select_unknown_mission_fails() {
        let mut session = GameSession::new(1);
        let id = MissionId::new();
        assert_eq!(
            session.select_mission(id).unwrap_err(),
            SessionError::MissionNotFound(id)
        );
        assert_eq!(session.screen(), Screen::MissionsList);
    }

    #[test]
    fn go_back_clears_selection_and_flow() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        session.report_progress().unwrap();
        session.handle_progress_choice(true).unwrap();
        session.roll_dice().unwrap();

        session.go_back();
        assert_eq!(session.screen(), Screen::MissionsList);
        assert!(session.selected_mission().is_none());
        assert!(!session.choice_open());
        assert!(!session.dice_open());
        assert!(session.last_roll().is_none());
    }

    #[test]
    fn delete_selected_mission_clears_selection() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        let removed = session.delete_mission(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(session.selected_mission().is_none());
        assert!(session.missions().is_empty());
    }

    #[test]
    fn delete_other_mission_keeps_selection() {
        let mut session = GameSession::with_samples(1);
        let selected = session.missions()[0].id;
        let other = session.missions()[1].id;
        session.select_mission(selected).unwrap();
        session.delete_mission(other).unwrap();
        assert_eq!(session.selected_mission().unwrap().id, selected);
        assert_eq!(session.missions().len(), 4);
    }

    #[test]
    fn delete_unknown_mission_fails() {
        let mut session = GameSession::new(1);
        let id = MissionId::new();
        assert_eq!(
            session.delete_mission(id).unwrap_err(),
            SessionError::MissionNotFound(id)
        );
    }

    #[test]
    fn report_progress_requires_selection() {
        let mut session = GameSession::new(1);
        assert_eq!(
            session.report_progress().unwrap_err(),
            SessionError::NoActiveMission
        );
        assert!(!session.choice_open());
    }

    #[test]
    fn report_progress_opens_choice_once() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        session.report_progress().unwrap();
        assert!(session.choice_open());
        assert_eq!(
            session.report_progress().unwrap_err(),
            SessionError::PromptAlreadyOpen
        );
    }

    #[test]
    fn progress_choice_selects_mode_and_opens_dice() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        session.report_progress().unwrap();

        let mode = session.handle_progress_choice(true).unwrap();
        assert_eq!(mode, RollMode::Success);
        assert!(!session.choice_open());
        assert!(session.dice_open());
        assert!(session.last_roll().is_none());
    }

    #[test]
    fn progress_choice_without_prompt_fails() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        assert_eq!(
            session.handle_progress_choice(true).unwrap_err(),
            SessionError::ChoiceNotPending
        );
    }

    #[test]
    fn success_cycle_advances_and_syncs_mission() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();

        let report = run_cycle(&mut session, true);
        assert!((3..=6).contains(&report.steps_taken));
        assert_eq!(report.from, 0);
        assert_eq!(report.to, report.steps_taken);
        assert_eq!(session.position(), report.to);
        // The collection entry, not a copy, carries the new day.
        let mission = session.missions().iter().find(|m| m.id == id).unwrap();
        assert_eq!(mission.current_day(), report.to);
        assert_eq!(session.streaks().current(), 1);
        assert!(!session.dice_open());
        assert_eq!(session.last_roll(), Some(report.steps_taken));
    }

    #[test]
    fn failure_cycle_rolls_low_and_resets_streak() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        run_cycle(&mut session, true);
        assert_eq!(session.streaks().current(), 1);

        let report = run_cycle(&mut session, false);
        assert!((1..=2).contains(&report.steps_taken));
        assert_eq!(session.streaks().current(), 0);
        assert_eq!(session.streaks().longest(), 1);
    }

    #[test]
    fn streak_history_over_mixed_cycles() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();

        let mut history = Vec::new();
        for made_it in [true, true, false, true] {
            run_cycle(&mut session, made_it);
            history.push(session.streaks().current());
        }
        assert_eq!(history, vec![1, 2, 0, 1]);
        assert_eq!(session.streaks().longest(), 2);
    }

    #[test]
    fn roll_guards() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();

        assert_eq!(session.roll_dice().unwrap_err(), SessionError::RollNotPending);
        assert_eq!(
            session.complete_roll().unwrap_err(),
            SessionError::RollNotPending
        );

        session.report_progress().unwrap();
        session.handle_progress_choice(true).unwrap();
        session.roll_dice().unwrap();
        assert_eq!(session.roll_dice().unwrap_err(), SessionError::AlreadyRolled);
    }

    #[test]
    fn complete_roll_requires_a_recorded_roll() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        session.report_progress().unwrap();
        session.handle_progress_choice(true).unwrap();
        assert_eq!(
            session.complete_roll().unwrap_err(),
            SessionError::RollNotPending
        );
    }

    #[test]
    fn move_clamps_at_mission_end() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();

        session.move_player(28).unwrap();
        assert_eq!(session.position(), 28);

        let report = session.move_player(5).unwrap();
        assert_eq!(report.to, 30);
        assert_eq!(report.steps_taken, 2);
        assert!(report.completed);
        let mission = session.missions().iter().find(|m| m.id == id).unwrap();
        assert_eq!(mission.current_day(), 30);
    }

    #[test]
    fn move_without_selection_fails() {
        let mut session = GameSession::new(1);
        assert_eq!(
            session.move_player(3).unwrap_err(),
            SessionError::NoActiveMission
        );
    }

    #[test]
    fn reset_game_restarts_mission_and_current_streak() {
        let (mut session, id) = session_with_mission();
        session.select_mission(id).unwrap();
        run_cycle(&mut session, true);
        run_cycle(&mut session, true);
        assert!(session.position() > 0);

        session.reset_game().unwrap();
        assert_eq!(session.position(), 0);
        assert_eq!(session.streaks().current(), 0);
        assert_eq!(session.streaks().longest(), 2);
        assert_eq!(session.streaks().total_days_completed(), 2);
        let mission = session.missions().iter().find(|m| m.id == id).unwrap();
        assert_eq!(mission.current_day(), 0);
    }

    #[test]
    fn reset_game_requires_selection() {
        let mut session = GameSession::new(1);
        assert_eq!(
            session.reset_game().unwrap_err(),
            SessionError::NoActiveMission
        );
    }

    #[test]
    fn rolls_are_deterministic_per_seed() {
        let mut a = GameSession::new(7);
        let mut b = GameSession::new(7);
        for session in [&mut a, &mut b] {
            let id = session
                .create_mission("Determinism", MissionIcon::Target)
                .unwrap();
            session.select_mission(id).unwrap();
        }
        for made_it in [true, false, true, true] {
            let ra = run_cycle(&mut a, made_it);
            let rb = run_cycle(&mut b, made_it);
            assert_eq!(ra, rb);
        }
    }

    #[test]
    fn completing_a_mission_absorbs_later_rolls() {
        let mut session = GameSession::new(3);
        let mission =
            Mission::with_details("Two days", MissionIcon::Star, ql_core::Accent::Yellow, "", 2)
                .unwrap();
        let id = session.add_mission(mission);
        session.select_mission(id).unwrap();

        run_cycle(&mut session, true);
        assert_eq!(session.position(), 2);
        assert!(session.selected_mission().unwrap().is_complete());

        // Reporting again still works; the move is fully absorbed.
        let report = run_cycle(&mut session, true);
        assert_eq!(report.steps_taken, 0);
        assert_eq!(session.position(), 2);
    }
}
