// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The interactive text menu.
//!
//! Every roster change is sent through [`club_roster_api::execute`] so the
//! caller's role is checked before anything is applied. Read-only views use
//! the listing handlers directly.

use std::io::{self, BufRead, Write};

use club_roster::{Command, ProfileUpdate};
use club_roster_api::{
    ApiError, AuthenticatedActor, ChangePasswordRequest, CredentialStore, ListPlayersResponse,
    LoginRequest, RegisterUserRequest, Role, UserSummary, change_password, change_role,
    delete_user, execute, filter_players, list_players, list_users, login, player_details,
    register_user, search_players, translate_domain_error,
};
use club_roster_domain::{
    ContractDetails, ContractedPlayer, DomainError, FreeAgent, Goalkeeper, Player, PlayerId,
    PlayerProfile, Position,
};
use tracing::{error, info, warn};

use crate::data::ClubData;
use crate::prompt::Prompter;

/// Failed logins allowed before the program gives up.
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

const MIN_PLAYER_AGE: u32 = 16;
const MAX_PLAYER_AGE: u32 = 45;

const RULE: &str = "========================================";

/// Asks for credentials until they match or the attempts run out.
///
/// # Returns
///
/// The logged-in actor, or `None` after [`MAX_LOGIN_ATTEMPTS`] failures.
///
/// # Errors
///
/// Returns an error if the input ends or the output cannot be written.
pub fn log_in<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    users: &CredentialStore,
) -> io::Result<Option<AuthenticatedActor>> {
    prompter.say(RULE)?;
    prompter.say("      FOOTBALL CLUB ROSTER SYSTEM")?;
    prompter.say(RULE)?;

    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        let request: LoginRequest = LoginRequest {
            username: prompter.read_non_empty("Username: ")?,
            password: prompter.read_non_empty("Password: ")?,
        };
        match login(users, &request) {
            Ok((actor, response)) => {
                prompter.say(&format!("[OK] {}", response.message))?;
                return Ok(Some(actor));
            }
            Err(err) => {
                warn!(attempt, username = %request.username, "Login failed");
                prompter.say(&format!("[ERROR] {err}"))?;
            }
        }
    }

    prompter.say("[ERROR] Too many failed login attempts.")?;
    Ok(None)
}

/// The main menu loop for one logged-in user.
#[derive(Debug)]
pub struct Menu<'p, R, W> {
    prompter: &'p mut Prompter<R, W>,
    data: ClubData,
    actor: AuthenticatedActor,
}

impl<'p, R: BufRead, W: Write> Menu<'p, R, W> {
    pub const fn new(
        prompter: &'p mut Prompter<R, W>,
        data: ClubData,
        actor: AuthenticatedActor,
    ) -> Self {
        Self {
            prompter,
            data,
            actor,
        }
    }

    /// Consumes the menu and returns the edited data.
    pub fn into_data(self) -> ClubData {
        self.data
    }

    /// Runs until the user chooses to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the input ends or the output cannot be written.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_main_menu()?;
            let choice: u8 = self.prompter.read_int_in_range("Choose an action", 0, 12)?;
            match choice {
                1 => self.players_menu()?,
                2 => self.view_all_players()?,
                3 => self.search_menu()?,
                4 => self.match_stats_menu()?,
                5 => self.medical_menu()?,
                6 => self.contracts_menu()?,
                7 => self.free_agents_menu()?,
                8 => self.season_menu()?,
                9 => self.users_menu()?,
                10 => self.change_own_password()?,
                11 => self.show_help()?,
                12 => self.save()?,
                _ => {
                    if self.prompter.read_yes_no("Save changes before exit?")? {
                        self.save()?;
                    }
                    info!(username = %self.actor.username, "Session ended");
                    self.prompter.say("[INFO] Goodbye.")?;
                    return Ok(());
                }
            }
        }
    }

    fn show_main_menu(&mut self) -> io::Result<()> {
        let header: String = format!(
            "\n=========== MAIN MENU ({} | {}) ===========",
            self.actor.username, self.actor.role
        );
        self.prompter.say(&header)?;
        self.prompter.say("1. Manage players (add / edit / remove)")?;
        self.prompter.say("2. View all players")?;
        self.prompter.say("3. Search / sort / filter")?;
        self.prompter.say("4. Match statistics")?;
        self.prompter.say("5. Injuries and market value")?;
        self.prompter.say("6. Contracts, transfers and loans")?;
        self.prompter.say("7. Free agents and signings")?;
        self.prompter.say("8. Season")?;
        if self.actor.is_admin() {
            self.prompter.say("9. User management")?;
        } else {
            self.prompter.say("9. User management (admin only)")?;
        }
        self.prompter.say("10. Change my password")?;
        self.prompter.say("11. Help")?;
        self.prompter.say("12. Save all data")?;
        self.prompter.say("0. Exit")
    }

    fn show_help(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- HELP ---")?;
        self.prompter
            .say("Keep the squad of a football club up to date:")?;
        self.prompter
            .say("* Add, edit or remove contracted players, free agents and goalkeepers.")?;
        self.prompter
            .say("* Record match statistics, injuries and market value changes.")?;
        self.prompter
            .say("* List, sell, loan, extend or terminate contracts.")?;
        self.prompter
            .say("* Negotiate with and sign free agents against the transfer budget.")?;
        self.prompter
            .say("Guests may look around; changes need a Standard or Admin account.")
    }

    fn save(&mut self) -> io::Result<()> {
        match self.data.save() {
            Ok(()) => self.prompter.say("[OK] All data saved."),
            Err(err) => {
                error!(error = %err, "Save failed");
                self.prompter.say(&format!("[ERROR] {err:#}"))
            }
        }
    }

    /// Sends one command through the authorization gate and reports the outcome.
    fn run_command(&mut self, command: Command) -> io::Result<bool> {
        match execute(&self.data.roster, command, &self.actor) {
            Ok(result) => {
                self.data.roster = result.new_roster;
                self.prompter
                    .say(&format!("[OK] {}", result.response.message))?;
                Ok(true)
            }
            Err(err) => {
                self.report(&err)?;
                Ok(false)
            }
        }
    }

    fn report(&mut self, err: &ApiError) -> io::Result<()> {
        warn!(username = %self.actor.username, error = %err, "Operation rejected");
        self.prompter.say(&format!("[ERROR] {err}"))
    }

    fn read_player_id(&mut self) -> io::Result<PlayerId> {
        loop {
            let id: u32 = self.prompter.read_parsed("Player ID: ", "a player ID")?;
            if id > 0 {
                return Ok(PlayerId::new(id));
            }
            self.prompter.say("[ERROR] Player IDs start at 1.")?;
        }
    }

    fn read_position(&mut self) -> io::Result<Position> {
        loop {
            let code: u8 = self.prompter.read_int_in_range(
                "Position (0=GK, 1=DEF, 2=MID, 3=FWD)",
                0,
                3,
            )?;
            match Position::from_code(code) {
                Ok(position) => return Ok(position),
                Err(err) => self.prompter.say(&format!("[ERROR] {err}"))?,
            }
        }
    }

    fn read_role(&mut self) -> io::Result<Role> {
        loop {
            let code: u8 = self
                .prompter
                .read_int_in_range("Role (0=Admin, 1=Standard, 2=Guest)", 0, 2)?;
            if let Some(role) = Role::from_code(code) {
                return Ok(role);
            }
        }
    }

    fn players_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n==== PLAYERS ====")?;
        self.prompter.say("1. Add contracted player")?;
        self.prompter.say("2. Add free agent")?;
        self.prompter.say("3. Add goalkeeper")?;
        self.prompter.say("4. Edit player details")?;
        self.prompter.say("5. Remove player")?;
        self.prompter.say("6. Change field player position")?;
        self.prompter.say("0. Back")?;
        match self.prompter.read_int_in_range("Your choice", 0, 6)? {
            1 => self.add_contracted_player(),
            2 => self.add_free_agent(),
            3 => self.add_goalkeeper(),
            4 => self.edit_profile(),
            5 => {
                let id: PlayerId = self.read_player_id()?;
                self.run_command(Command::RemovePlayer { id }).map(|_| ())
            }
            6 => {
                let id: PlayerId = self.read_player_id()?;
                let position: Position = self.read_position()?;
                self.run_command(Command::ChangePosition { id, position }).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    fn read_profile(&mut self) -> io::Result<Result<PlayerProfile, DomainError>> {
        self.prompter.say("\n--- NEW PLAYER ---")?;
        let name: String = self.prompter.read_non_empty("Name: ")?;
        let age: u32 = self
            .prompter
            .read_int_in_range("Age", MIN_PLAYER_AGE, MAX_PLAYER_AGE)?;
        let nationality: String = self.prompter.read_non_empty("Nationality: ")?;
        let origin: String = self.prompter.read_non_empty("Place of origin: ")?;
        let height: f64 = self.prompter.read_f64("Height (m): ")?;
        let weight: f64 = self.prompter.read_f64("Weight (kg): ")?;
        let market_value: f64 = self.prompter.read_f64("Market value: ")?;
        Ok(PlayerProfile::new(
            &name,
            age,
            &nationality,
            &origin,
            height,
            weight,
            market_value,
        ))
    }

    /// Adds a freshly built player, or reports why it could not be built.
    fn add_built_player(&mut self, built: Result<Player, DomainError>) -> io::Result<()> {
        match built {
            Ok(player) => self
                .run_command(Command::AddPlayer {
                    player: Box::new(player),
                })
                .map(|_| ()),
            Err(err) => self.report(&translate_domain_error(err)),
        }
    }

    fn add_contracted_player(&mut self) -> io::Result<()> {
        let profile: Result<PlayerProfile, DomainError> = self.read_profile()?;
        let position: Position = self.read_position()?;
        let salary: f64 = self.prompter.read_f64("Annual salary: ")?;
        let until: String = self.prompter.read_date("Contract until")?;
        let club: String = self.data.roster.club_name().to_string();

        let built: Result<Player, DomainError> = profile.and_then(|profile| {
            let contract: ContractDetails = ContractDetails::new(&club, salary, &until)?;
            Ok(Player::from(ContractedPlayer::new(
                profile, position, contract,
            )))
        });
        self.add_built_player(built)
    }

    fn add_free_agent(&mut self) -> io::Result<()> {
        let profile: Result<PlayerProfile, DomainError> = self.read_profile()?;
        let position: Position = self.read_position()?;
        let expected_salary: f64 = self.prompter.read_f64("Expected salary: ")?;
        let last_club: String = self
            .prompter
            .read_optional("Last club (blank if none): ")?;

        let built: Result<Player, DomainError> = profile.and_then(|profile| {
            FreeAgent::new(profile, position, expected_salary, &last_club).map(Player::from)
        });
        self.add_built_player(built)
    }

    fn add_goalkeeper(&mut self) -> io::Result<()> {
        let profile: Result<PlayerProfile, DomainError> = self.read_profile()?;
        let built: Result<Player, DomainError> =
            profile.map(|profile| Player::from(Goalkeeper::new(profile)));
        self.add_built_player(built)
    }

    fn edit_profile(&mut self) -> io::Result<()> {
        let id: PlayerId = self.read_player_id()?;
        self.prompter.say("1. Name")?;
        self.prompter.say("2. Age")?;
        self.prompter.say("3. Nationality")?;
        self.prompter.say("4. Place of origin")?;
        self.prompter.say("5. Height")?;
        self.prompter.say("6. Weight")?;
        self.prompter.say("7. Market value")?;
        let update: ProfileUpdate = match self.prompter.read_int_in_range("Field", 1, 7)? {
            1 => ProfileUpdate::Name(self.prompter.read_non_empty("New name: ")?),
            2 => ProfileUpdate::Age(self.prompter.read_int_in_range(
                "New age",
                MIN_PLAYER_AGE,
                MAX_PLAYER_AGE,
            )?),
            3 => ProfileUpdate::Nationality(self.prompter.read_non_empty("New nationality: ")?),
            4 => ProfileUpdate::Origin(self.prompter.read_non_empty("New place of origin: ")?),
            5 => ProfileUpdate::Height(self.prompter.read_f64("New height (m): ")?),
            6 => ProfileUpdate::Weight(self.prompter.read_f64("New weight (kg): ")?),
            _ => ProfileUpdate::MarketValue(self.prompter.read_f64("New market value: ")?),
        };
        self.run_command(Command::UpdateProfile { id, update })
            .map(|_| ())
    }

    fn print_listing(&mut self, listing: &ListPlayersResponse) -> io::Result<()> {
        let out: &mut W = self.prompter.output();
        writeln!(
            out,
            "\n{} | transfer budget {:.2} | {} player(s)",
            listing.club_name,
            listing.transfer_budget,
            listing.players.len()
        )?;
        writeln!(
            out,
            "{:<6} {:<24} {:<18} {:>3}  {:<32} {:>14} {:>7}",
            "ID", "Name", "Kind", "Age", "Status", "Value", "Rating"
        )?;
        for row in &listing.players {
            writeln!(
                out,
                "{:<6} {:<24} {:<18} {:>3}  {:<32} {:>14.2} {:>7.2}",
                row.id, row.name, row.kind, row.age, row.status, row.value, row.performance_rating
            )?;
        }
        if listing.players.is_empty() {
            writeln!(out, "(no players)")?;
        }
        Ok(())
    }

    fn print_details_of(&mut self, listing: &ListPlayersResponse) -> io::Result<()> {
        if listing.players.is_empty() {
            return self.prompter.say("[INFO] No matching players.");
        }
        for row in &listing.players {
            self.show_details(PlayerId::new(row.id))?;
            self.prompter.say("------------------------")?;
        }
        Ok(())
    }

    fn show_details(&mut self, id: PlayerId) -> io::Result<()> {
        match player_details(&self.data.roster, id) {
            Ok(details) => self.prompter.say(&details.description),
            Err(err) => self.report(&err),
        }
    }

    fn view_all_players(&mut self) -> io::Result<()> {
        let listing: ListPlayersResponse = list_players(&self.data.roster);
        self.print_listing(&listing)
    }

    fn search_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- SEARCH / SORT / FILTER ---")?;
        self.prompter.say("1. Search by name")?;
        self.prompter.say("2. Sort by performance rating")?;
        self.prompter.say("3. Filter by status")?;
        self.prompter.say("4. Show one player")?;
        self.prompter.say("0. Back")?;
        match self.prompter.read_int_in_range("Your choice", 0, 4)? {
            1 => {
                let query: String = self.prompter.read_non_empty("Name or part of it: ")?;
                let listing: ListPlayersResponse = search_players(&self.data.roster, &query);
                self.print_details_of(&listing)
            }
            2 => {
                if self.run_command(Command::SortByPerformanceRating)? {
                    self.view_all_players()?;
                }
                Ok(())
            }
            3 => {
                let query: String = self
                    .prompter
                    .read_non_empty("Status (Active, Injured, On Loan, Available...): ")?;
                let listing: ListPlayersResponse = filter_players(&self.data.roster, &query);
                self.print_details_of(&listing)
            }
            4 => {
                let id: PlayerId = self.read_player_id()?;
                self.show_details(id)
            }
            _ => Ok(()),
        }
    }

    fn match_stats_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- MATCH STATISTICS ---")?;
        self.prompter.say("1. Record goals, assists and shots")?;
        self.prompter.say("2. Record tackles")?;
        self.prompter.say("3. Register a key pass")?;
        self.prompter.say("4. Register a match played")?;
        self.prompter.say("5. Record a goalkeeper match")?;
        self.prompter.say("6. Register a clean sheet")?;
        self.prompter.say("7. Register a penalty save")?;
        self.prompter.say("0. Back")?;
        let choice: u8 = self.prompter.read_int_in_range("Your choice", 0, 7)?;
        if choice == 0 {
            return Ok(());
        }
        let id: PlayerId = self.read_player_id()?;
        let command: Command = match choice {
            1 => Command::RecordAttackingStats {
                id,
                goals: self.prompter.read_int("Goals: ")?,
                assists: self.prompter.read_int("Assists: ")?,
                shots: self.prompter.read_int("Shots: ")?,
            },
            2 => Command::RecordDefensiveStats {
                id,
                tackles: self.prompter.read_int("Tackles: ")?,
            },
            3 => Command::RegisterKeyPass { id },
            4 => Command::RegisterMatchPlayed { id },
            5 => Command::RecordGoalkeeperMatch {
                id,
                goals_against: self.prompter.read_int("Goals conceded: ")?,
                saves: self.prompter.read_int("Saves: ")?,
            },
            6 => Command::RegisterCleanSheet { id },
            _ => Command::RegisterPenaltySave { id },
        };
        self.run_command(command).map(|_| ())
    }

    fn medical_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- INJURIES AND MARKET VALUE ---")?;
        self.prompter.say("1. Report an injury")?;
        self.prompter.say("2. Return to fitness")?;
        self.prompter.say("3. Change market value by a percentage")?;
        self.prompter.say("0. Back")?;
        let choice: u8 = self.prompter.read_int_in_range("Your choice", 0, 3)?;
        if choice == 0 {
            return Ok(());
        }
        let id: PlayerId = self.read_player_id()?;
        let command: Command = match choice {
            1 => Command::ReportInjury {
                id,
                injury_type: self.prompter.read_non_empty("Injury: ")?,
                recovery_days: self.prompter.read_int("Expected recovery (days): ")?,
            },
            2 => Command::ReturnToFitness { id },
            _ => Command::UpdateMarketValue {
                id,
                percentage: self.prompter.read_f64("Change in percent (e.g. -10): ")?,
            },
        };
        self.run_command(command).map(|_| ())
    }

    fn contracts_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- CONTRACTS, TRANSFERS AND LOANS ---")?;
        self.prompter.say("1. List for transfer")?;
        self.prompter.say("2. Remove from transfer list")?;
        self.prompter.say("3. Transfer to another club")?;
        self.prompter.say("4. Extend contract")?;
        self.prompter.say("5. Terminate contract")?;
        self.prompter.say("6. Send on loan")?;
        self.prompter.say("7. Return from loan")?;
        self.prompter.say("0. Back")?;
        let choice: u8 = self.prompter.read_int_in_range("Your choice", 0, 7)?;
        if choice == 0 {
            return Ok(());
        }
        let id: PlayerId = self.read_player_id()?;
        let command: Command = match choice {
            1 => Command::ListForTransfer {
                id,
                fee: self.prompter.read_f64("Asking fee: ")?,
                conditions: self.prompter.read_optional("Conditions (optional): ")?,
            },
            2 => Command::RemoveFromTransferList { id },
            3 => Command::TransferToClub {
                id,
                new_club: self.prompter.read_non_empty("Buying club: ")?,
                fee: self.prompter.read_f64("Fee offered: ")?,
            },
            4 => Command::ExtendContract {
                id,
                new_date: self.prompter.read_date("New end date")?,
                new_salary: self.prompter.read_f64("New salary: ")?,
            },
            5 => Command::TerminateContract {
                id,
                reason: self.prompter.read_non_empty("Reason: ")?,
            },
            6 => Command::SendOnLoan {
                id,
                club: self.prompter.read_non_empty("Loan club: ")?,
                end_date: self.prompter.read_date("Loan ends")?,
            },
            _ => Command::ReturnFromLoan { id },
        };
        self.run_command(command).map(|_| ())
    }

    fn free_agents_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- FREE AGENTS AND SIGNINGS ---")?;
        self.prompter.say("1. Sign a free agent")?;
        self.prompter.say("2. Make an offer without signing")?;
        self.prompter.say("3. Raise salary expectations")?;
        self.prompter.say("4. Lower salary expectations")?;
        self.prompter.say("5. Open or close negotiations")?;
        self.prompter.say("6. Another month without a club")?;
        self.prompter.say("0. Back")?;
        let choice: u8 = self.prompter.read_int_in_range("Your choice", 0, 6)?;
        if choice == 0 {
            return Ok(());
        }
        if choice == 1 {
            let available: ListPlayersResponse =
                filter_players(&self.data.roster, "Free Agent (Available)");
            if available.players.is_empty() {
                return self
                    .prompter
                    .say("[INFO] No free agents are open to negotiation.");
            }
            self.print_listing(&available)?;
        }
        let id: PlayerId = self.read_player_id()?;
        let command: Command = match choice {
            1 => Command::SignFreeAgent {
                id,
                salary_offer: self.prompter.read_f64("Salary offer: ")?,
                contract_until: self.prompter.read_date("Contract until")?,
            },
            2 => Command::NegotiateOffer {
                id,
                offer: self.prompter.read_f64("Salary offer: ")?,
            },
            3 => Command::IncreaseExpectations {
                id,
                percentage: self.prompter.read_f64("Increase in percent: ")?,
            },
            4 => Command::DecreaseExpectations {
                id,
                percentage: self.prompter.read_f64("Decrease in percent: ")?,
            },
            5 => Command::SetAvailability {
                id,
                available: self.prompter.read_yes_no("Open to negotiation?")?,
            },
            _ => Command::AdvanceMonth { id },
        };
        self.run_command(command).map(|_| ())
    }

    fn season_menu(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- SEASON ---")?;
        self.prompter.say("1. Celebrate a birthday")?;
        self.prompter.say("2. Reset one player's season statistics")?;
        self.prompter.say("3. Reset everyone's season statistics")?;
        self.prompter.say("4. Set the transfer budget")?;
        self.prompter.say("0. Back")?;
        let command: Command = match self.prompter.read_int_in_range("Your choice", 0, 4)? {
            1 => Command::CelebrateBirthday {
                id: self.read_player_id()?,
            },
            2 => Command::ResetSeasonStats {
                id: self.read_player_id()?,
            },
            3 => {
                if !self
                    .prompter
                    .read_yes_no("Zero the statistics of every player?")?
                {
                    return Ok(());
                }
                Command::ResetAllSeasonStats
            }
            4 => Command::SetTransferBudget {
                budget: self.prompter.read_f64("New transfer budget: ")?,
            },
            _ => return Ok(()),
        };
        self.run_command(command).map(|_| ())
    }

    fn users_menu(&mut self) -> io::Result<()> {
        let users: Vec<UserSummary> = match list_users(&self.data.users, &self.actor) {
            Ok(users) => users,
            Err(err) => return self.report(&err),
        };

        self.prompter.say("\n--- USER MANAGEMENT ---")?;
        for user in &users {
            self.prompter
                .say(&format!("  {:<20} {}", user.username, user.role))?;
        }
        self.prompter.say("1. Create user")?;
        self.prompter.say("2. Delete user")?;
        self.prompter.say("3. Change a user's role")?;
        self.prompter.say("0. Back")?;

        let outcome: Result<UserSummary, ApiError> =
            match self.prompter.read_int_in_range("Your choice", 0, 3)? {
                1 => {
                    let request: RegisterUserRequest = RegisterUserRequest {
                        username: self.prompter.read_non_empty("New username: ")?,
                        password: self.prompter.read_non_empty("Password: ")?,
                        role: self.read_role()?,
                    };
                    register_user(&mut self.data.users, &request, &self.actor)
                }
                2 => {
                    let username: String =
                        self.prompter.read_non_empty("Username to delete: ")?;
                    delete_user(&mut self.data.users, &username, &self.actor)
                }
                3 => {
                    let username: String = self.prompter.read_non_empty("Username: ")?;
                    let role: Role = self.read_role()?;
                    change_role(&mut self.data.users, &username, role, &self.actor)
                }
                _ => return Ok(()),
            };

        match outcome {
            Ok(user) => self
                .prompter
                .say(&format!("[OK] {} ({})", user.username, user.role)),
            Err(err) => self.report(&err),
        }
    }

    fn change_own_password(&mut self) -> io::Result<()> {
        let request: ChangePasswordRequest = ChangePasswordRequest {
            current_password: self.prompter.read_non_empty("Current password: ")?,
            new_password: self.prompter.read_non_empty("New password: ")?,
        };
        match change_password(&mut self.data.users, &request, &self.actor) {
            Ok(()) => self.prompter.say("[OK] Password changed."),
            Err(err) => self.report(&err),
        }
    }
}
