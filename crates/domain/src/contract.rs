// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracted players and the contract/transfer/loan state machine.
//!
//! A contracted player moves between these states:
//!
//! - Active: under contract, not listed
//! - Listed: a `TransferListing` is present
//! - On loan: a `LoanSpell` is present; the club of record is unchanged
//! - Terminated: the club is `TERMINATED_CLUB`
//!
//! A sale reassigns the club and returns the player to Active under the
//! new club. Termination cannot be undone.

use crate::error::DomainError;
use crate::field_player::{FieldPlayer, Position};
use crate::free_agent::FreeAgent;
use crate::player::{PlayerKind, PlayerProfile, PlayerRole, describe_profile};
use crate::validation::{validate_club_name, validate_date};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Club of record after a contract is terminated.
pub const TERMINATED_CLUB: &str = "N/A (Terminated)";
/// Value added per point of performance rating.
pub const CONTRACT_RATING_WEIGHT: f64 = 50_000.0;
/// Divisor applied to salary in the value formula.
pub const SALARY_VALUE_DIVISOR: f64 = 10_000.0;
/// Ages above this lose market value on each birthday.
pub const CONTRACT_DECLINE_AGE: u32 = 30;
/// Market value percentage lost per birthday past `CONTRACT_DECLINE_AGE`.
pub const CONTRACT_AGE_DECLINE_PCT: f64 = 5.0;

/// A temporary spell at another club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSpell {
    /// Club the player is loaned to.
    pub club: String,
    /// Canonical date the loan ends.
    pub end_date: String,
}

/// Contract terms owned by a contracted player.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDetails {
    club_name: String,
    salary: f64,
    contract_until: String,
    loan: Option<LoanSpell>,
}

impl ContractDetails {
    /// Creates contract terms.
    ///
    /// # Arguments
    ///
    /// * `club_name` - Club of record
    /// * `salary` - Salary, must be positive
    /// * `contract_until` - Canonical `YYYY-MM-DD` expiry date
    ///
    /// # Errors
    ///
    /// Returns an error if the club is empty, the salary is not positive or
    /// the date is not canonical.
    pub fn new(club_name: &str, salary: f64, contract_until: &str) -> Result<Self, DomainError> {
        validate_club_name(club_name)?;
        if !salary.is_finite() || salary <= 0.0 {
            return Err(DomainError::InvalidSalary { value: salary });
        }
        validate_date("contract end date", contract_until)?;

        Ok(Self {
            club_name: club_name.to_string(),
            salary,
            contract_until: contract_until.to_string(),
            loan: None,
        })
    }

    /// Reassembles terms read back from storage, checking each field.
    pub(crate) fn restore(
        club_name: String,
        salary: f64,
        contract_until: String,
        loan: Option<LoanSpell>,
    ) -> Result<Self, DomainError> {
        validate_club_name(&club_name)?;
        if !salary.is_finite() || salary < 0.0 {
            return Err(DomainError::InvalidSalary { value: salary });
        }
        validate_date("contract end date", &contract_until)?;
        if let Some(spell) = &loan {
            validate_club_name(&spell.club)?;
            validate_date("loan end date", &spell.end_date)?;
        }
        Ok(Self {
            club_name,
            salary,
            contract_until,
            loan,
        })
    }

    /// Returns the club of record.
    #[must_use]
    pub fn club_name(&self) -> &str {
        &self.club_name
    }

    /// Returns the salary.
    #[must_use]
    pub const fn salary(&self) -> f64 {
        self.salary
    }

    /// Returns the canonical expiry date.
    #[must_use]
    pub fn contract_until(&self) -> &str {
        &self.contract_until
    }

    /// Returns the current loan, if any.
    #[must_use]
    pub const fn loan(&self) -> Option<&LoanSpell> {
        self.loan.as_ref()
    }

    /// Returns true while the player is on loan.
    #[must_use]
    pub const fn is_loaned(&self) -> bool {
        self.loan.is_some()
    }

    /// Returns the loan end date while on loan.
    #[must_use]
    pub fn loan_end_date(&self) -> Option<&str> {
        self.loan.as_ref().map(|spell| spell.end_date.as_str())
    }

    /// Returns true once the contract has been terminated.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.club_name == TERMINATED_CLUB
    }

    /// Scales the salary by `(1 + pct / 100)`, flooring at zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SalaryNotAdjustable` if the current salary is
    /// zero or negative, or `InvalidMeasurement` if `percentage` or the
    /// resulting salary is not finite.
    pub fn adjust_salary(&mut self, percentage: f64) -> Result<(), DomainError> {
        if self.salary <= 0.0 {
            return Err(DomainError::SalaryNotAdjustable {
                salary: self.salary,
            });
        }
        if !percentage.is_finite() {
            return Err(DomainError::InvalidMeasurement {
                field: "salary percentage",
                value: percentage,
            });
        }
        let adjusted: f64 = (self.salary * (1.0 + percentage / 100.0)).max(0.0);
        if !adjusted.is_finite() {
            return Err(DomainError::InvalidMeasurement {
                field: "salary",
                value: adjusted,
            });
        }
        self.salary = adjusted;
        Ok(())
    }

    /// Sets the expiry date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the date is not canonical.
    pub fn set_contract_until(&mut self, date: &str) -> Result<(), DomainError> {
        validate_date("contract end date", date)?;
        self.contract_until = date.to_string();
        Ok(())
    }

    fn set_club(&mut self, club: &str) {
        self.club_name = club.to_string();
    }
}

/// Terms under which a listed player may be sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferListing {
    /// Minimum acceptable fee.
    pub fee: f64,
    /// Free-text conditions.
    pub conditions: String,
}

/// A field player under contract with a club.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractedPlayer {
    field: FieldPlayer,
    contract: ContractDetails,
    listing: Option<TransferListing>,
}

impl ContractedPlayer {
    /// Creates a contracted player.
    #[must_use]
    pub fn new(profile: PlayerProfile, position: Position, contract: ContractDetails) -> Self {
        Self {
            field: FieldPlayer::new(profile, position),
            contract,
            listing: None,
        }
    }

    pub(crate) const fn from_parts(
        field: FieldPlayer,
        contract: ContractDetails,
        listing: Option<TransferListing>,
    ) -> Self {
        Self {
            field,
            contract,
            listing,
        }
    }

    /// Builds a contracted player from a free agent who has just signed.
    ///
    /// Identity, biometrics, injuries, position and statistics carry over.
    #[must_use]
    pub fn from_free_agent(agent: FreeAgent, contract: ContractDetails) -> Self {
        Self {
            field: agent.into_field_player(),
            contract,
            listing: None,
        }
    }

    /// Borrows the outfield part.
    #[must_use]
    pub const fn field(&self) -> &FieldPlayer {
        &self.field
    }

    /// Mutably borrows the outfield part.
    pub const fn field_mut(&mut self) -> &mut FieldPlayer {
        &mut self.field
    }

    /// Borrows the contract terms.
    #[must_use]
    pub const fn contract(&self) -> &ContractDetails {
        &self.contract
    }

    /// Returns the current transfer listing, if any.
    #[must_use]
    pub const fn listing(&self) -> Option<&TransferListing> {
        self.listing.as_ref()
    }

    /// Returns true while listed for transfer.
    #[must_use]
    pub const fn is_listed_for_transfer(&self) -> bool {
        self.listing.is_some()
    }

    /// Returns the asking price, 0 when not listed.
    #[must_use]
    pub fn transfer_fee(&self) -> f64 {
        self.listing.as_ref().map_or(0.0, |listing| listing.fee)
    }

    /// Returns the listing conditions, empty when not listed.
    #[must_use]
    pub fn transfer_conditions(&self) -> &str {
        self.listing
            .as_ref()
            .map_or("", |listing| listing.conditions.as_str())
    }

    /// Puts the player on the transfer list.
    ///
    /// Listing an already listed player replaces the terms.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransferFee` if the fee is not positive, or
    /// `ContractTerminated` if the contract has been terminated.
    pub fn list_for_transfer(&mut self, fee: f64, conditions: &str) -> Result<(), DomainError> {
        if !fee.is_finite() || fee <= 0.0 {
            return Err(DomainError::InvalidTransferFee { fee });
        }
        if self.contract.is_terminated() {
            return Err(DomainError::ContractTerminated {
                player: self.name().to_string(),
            });
        }
        self.listing = Some(TransferListing {
            fee,
            conditions: conditions.to_string(),
        });
        info!(player = %self.name(), fee, "Listed for transfer");
        Ok(())
    }

    /// Takes the player off the transfer list.
    pub fn remove_from_transfer_list(&mut self) {
        self.listing = None;
        info!(player = %self.name(), "Removed from transfer list");
    }

    /// Sells the player to `new_club`.
    ///
    /// # Errors
    ///
    /// Returns `NotListedForTransfer` when the player is not listed,
    /// `FeeBelowAskingPrice` when `fee` is under the asking price, or
    /// `InvalidClubName` for an empty club. The player is unchanged on error.
    pub fn transfer_to_club(&mut self, new_club: &str, fee: f64) -> Result<(), DomainError> {
        let Some(listing) = &self.listing else {
            warn!(player = %self.name(), "Transfer rejected: not listed");
            return Err(DomainError::NotListedForTransfer {
                player: self.name().to_string(),
            });
        };
        let asking: f64 = listing.fee;
        if !fee.is_finite() || fee < asking {
            warn!(player = %self.name(), fee, asking, "Transfer rejected: fee too low");
            return Err(DomainError::FeeBelowAskingPrice {
                offered: fee,
                asking,
            });
        }
        validate_club_name(new_club)?;

        let previous: String = self.contract.club_name().to_string();
        self.contract.set_club(new_club);
        self.contract.loan = None;
        self.listing = None;
        info!(
            player = %self.name(),
            from = %previous,
            to = new_club,
            fee,
            "Transfer completed"
        );
        Ok(())
    }

    /// Extends the contract to `new_date` at `new_salary`.
    ///
    /// The salary change is applied as a percentage through
    /// `ContractDetails::adjust_salary`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSalary` if `new_salary` is not positive, `InvalidDate`
    /// if the date is not canonical, or `SalaryNotAdjustable` if the current
    /// salary is zero. Nothing changes on error.
    pub fn extend_contract(&mut self, new_date: &str, new_salary: f64) -> Result<(), DomainError> {
        if !new_salary.is_finite() || new_salary <= 0.0 {
            return Err(DomainError::InvalidSalary { value: new_salary });
        }
        validate_date("contract end date", new_date)?;
        let current: f64 = self.contract.salary();
        if current <= 0.0 {
            return Err(DomainError::SalaryNotAdjustable { salary: current });
        }

        let percentage: f64 = (new_salary - current) / current * 100.0;
        self.contract.adjust_salary(percentage)?;
        self.contract.set_contract_until(new_date)?;
        info!(
            player = %self.name(),
            until = new_date,
            salary = self.contract.salary(),
            "Contract extended"
        );
        Ok(())
    }

    /// Terminates the contract. Any listing is withdrawn.
    pub fn terminate_contract(&mut self, reason: &str) {
        let previous: String = self.contract.club_name().to_string();
        self.contract.set_club(TERMINATED_CLUB);
        self.listing = None;
        info!(player = %self.name(), club = %previous, reason, "Contract terminated");
    }

    /// Sends the player on loan until `end_date`. The club of record is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidClubName`, `InvalidDate` or `ContractTerminated`.
    pub fn send_on_loan(&mut self, club: &str, end_date: &str) -> Result<(), DomainError> {
        validate_club_name(club)?;
        validate_date("loan end date", end_date)?;
        if self.contract.is_terminated() {
            return Err(DomainError::ContractTerminated {
                player: self.name().to_string(),
            });
        }
        self.contract.loan = Some(LoanSpell {
            club: club.to_string(),
            end_date: end_date.to_string(),
        });
        info!(player = %self.name(), club, until = end_date, "Sent on loan");
        Ok(())
    }

    /// Ends any loan spell.
    pub fn return_from_loan(&mut self) {
        if self.contract.loan.take().is_some() {
            info!(player = %self.name(), "Returned from loan");
        }
    }

    fn name(&self) -> &str {
        self.field.profile().name()
    }
}

impl PlayerRole for ContractedPlayer {
    fn profile(&self) -> &PlayerProfile {
        self.field.profile()
    }

    fn profile_mut(&mut self) -> &mut PlayerProfile {
        self.field.profile_mut()
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Contracted
    }

    fn calculate_value(&self) -> f64 {
        self.profile().market_value()
            + self.calculate_performance_rating() * CONTRACT_RATING_WEIGHT
            + self.contract.salary() / SALARY_VALUE_DIVISOR
    }

    fn calculate_performance_rating(&self) -> f64 {
        self.field.performance_rating()
    }

    fn status(&self) -> String {
        if self.profile().is_injured() {
            String::from("Injured")
        } else if self.contract.is_loaned() {
            String::from("On Loan")
        } else {
            String::from("Active")
        }
    }

    fn celebrate_birthday(&mut self) {
        self.field.profile_mut().age_one_year();
        let age: u32 = self.profile().age();
        if age > CONTRACT_DECLINE_AGE {
            // A finite constant never fails the percentage check.
            let _ = self
                .field
                .profile_mut()
                .update_market_value(-CONTRACT_AGE_DECLINE_PCT);
        }
        info!(player = %self.name(), age, "Birthday celebrated");
    }

    fn describe(&self) -> String {
        use std::fmt::Write as _;

        let mut out: String = String::new();
        describe_profile(&mut out, self);
        self.field.describe_stats(&mut out);
        let _ = writeln!(
            out,
            "Club: {} | Salary: {:.2} | Contract until: {}",
            self.contract.club_name(),
            self.contract.salary(),
            self.contract.contract_until()
        );
        if let Some(spell) = self.contract.loan() {
            let _ = writeln!(out, "On loan at {} until {}", spell.club, spell.end_date);
        }
        if let Some(listing) = &self.listing {
            let _ = writeln!(
                out,
                "Listed for transfer: {:.2} ({})",
                listing.fee,
                listing.conditions
            );
        }
        out
    }
}
