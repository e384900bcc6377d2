//! Strategy enumerations understood by the supervisor.
//!
//! Strategies passed as call arguments travel as their zero-based position in
//! the family's [`StrategyFamily::ALL`] array. That order is part of the wire
//! contract: new members may only be appended. Strategies reported inside
//! records travel by name instead.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A strategy family with a fixed wire ordering.
pub trait StrategyFamily: Copy + Eq + 'static {
    /// Every member, in wire order.
    const ALL: &'static [Self];

    /// Zero-based position of this member in [`Self::ALL`].
    ///
    /// A member left out of `ALL` maps to one past the last position, which
    /// the supervisor rejects as a bad strategy.
    fn ordinal(self) -> i32 {
        let position = Self::ALL
            .iter()
            .position(|member| *member == self)
            .unwrap_or(Self::ALL.len());
        i32::try_from(position).unwrap_or(i32::MAX)
    }
}

/// Policy used to choose the address a process is started on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StartingStrategy {
    /// Follow the address order of the configuration.
    Config,
    /// Pick the least loaded address that can take the process.
    LessLoaded,
    /// Pick the most loaded address that can still take the process.
    MostLoaded,
    /// Start on the local address only.
    Local,
}

impl StrategyFamily for StartingStrategy {
    const ALL: &'static [Self] = &[
        Self::Config,
        Self::LessLoaded,
        Self::MostLoaded,
        Self::Local,
    ];
}

/// Policy used to resolve processes running on several addresses at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConciliationStrategy {
    /// Keep the youngest instance and stop the others.
    Senicide,
    /// Keep the oldest instance and stop the others.
    Infanticide,
    /// Leave the conflict to the user.
    User,
    /// Stop every conflicting instance.
    Stop,
    /// Stop every instance and start the process again.
    Restart,
    /// Apply the running failure strategy of each process.
    RunningFailure,
}

impl StrategyFamily for ConciliationStrategy {
    const ALL: &'static [Self] = &[
        Self::Senicide,
        Self::Infanticide,
        Self::User,
        Self::Stop,
        Self::Restart,
        Self::RunningFailure,
    ];
}

/// Reaction to a process that fails while its application starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StartingFailureStrategy {
    /// Abort the application start.
    Abort,
    /// Stop the application.
    Stop,
    /// Carry on starting the rest of the application.
    Continue,
}

/// Reaction to a process that fails once its application is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RunningFailureStrategy {
    /// Leave the failure alone.
    Continue,
    /// Restart the failed process.
    RestartProcess,
    /// Stop the whole application.
    StopApplication,
    /// Restart the whole application.
    RestartApplication,
}
