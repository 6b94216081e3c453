//! Cipher purposes and their fixed keys
//!
//! Callers pick a transform by what the field means, never by raw key. Each
//! purpose owns its key; changing one does not affect the others.

use std::fmt;

use crate::xor::XorCipher;

/// A named use-case selecting which fixed XOR key applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherPurpose {
    /// Level copy passwords
    LevelPassword,
    /// Private message bodies
    Message,
    /// Account passwords sent on login
    AccountPassword,
    /// Level leaderboard submissions
    LevelLeaderboard,
    /// Level upload checksums
    LevelUpload,
    /// Comment checksums
    Comment,
    /// Quest (challenge) payloads
    Challenges,
    /// Chest reward payloads
    Rewards,
    /// Like and rate checksums
    LikeRate,
    /// Player stat submissions
    Stat,
    /// Local account save data
    SaveData,
}

impl CipherPurpose {
    /// Every purpose, in declaration order
    pub const ALL: [Self; 11] = [
        Self::LevelPassword,
        Self::Message,
        Self::AccountPassword,
        Self::LevelLeaderboard,
        Self::LevelUpload,
        Self::Comment,
        Self::Challenges,
        Self::Rewards,
        Self::LikeRate,
        Self::Stat,
        Self::SaveData,
    ];

    /// Key material for this purpose
    pub(crate) const fn key(self) -> &'static [u8] {
        match self {
            Self::LevelPassword => b"26364",
            Self::Message => b"14251",
            Self::AccountPassword => b"37526",
            Self::LevelLeaderboard => b"39673",
            Self::LevelUpload => b"41274",
            Self::Comment => b"29481",
            Self::Challenges => b"19847",
            Self::Rewards => b"59182",
            Self::LikeRate => b"58281",
            Self::Stat => b"85271",
            // Save files are XORed with the single byte 11
            Self::SaveData => &[11],
        }
    }

    /// XOR cipher bound to this purpose's key
    pub const fn cipher(self) -> XorCipher<'static> {
        XorCipher::new(self.key())
    }

    /// Short lowercase name, used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::LevelPassword => "level-password",
            Self::Message => "message",
            Self::AccountPassword => "account-password",
            Self::LevelLeaderboard => "level-leaderboard",
            Self::LevelUpload => "level-upload",
            Self::Comment => "comment",
            Self::Challenges => "challenges",
            Self::Rewards => "rewards",
            Self::LikeRate => "like-rate",
            Self::Stat => "stat",
            Self::SaveData => "save-data",
        }
    }
}

impl fmt::Display for CipherPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
