//! Songs

use tracing::trace;

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};
use crate::index::SongField;
use crate::record::Record;

/// A level soundtrack
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Newgrounds id for custom songs, track index for official ones
    pub id: i64,
    /// Track title
    pub name: String,
    /// Artist name
    pub author: String,
    /// File size in megabytes; zero for official songs
    pub size: f64,
    /// Listen page, custom songs only
    pub page_url: Option<String>,
    /// Direct download link, custom songs only
    pub download_url: Option<String>,
    /// Whether the track is a Newgrounds upload rather than a built-in track
    pub custom: bool,
}

/// Built-in tracks as (title, artist), by index
const OFFICIAL_SONGS: [(&str, &str); 21] = [
    ("Stereo Madness", "ForeverBound"),
    ("Back On Track", "DJVI"),
    ("Polargeist", "Step"),
    ("Dry Out", "DJVI"),
    ("Base After Base", "DJVI"),
    ("Can't Let Go", "DJVI"),
    ("Jumper", "Waterflame"),
    ("Time Machine", "Waterflame"),
    ("Cycles", "DJVI"),
    ("xStep", "DJVI"),
    ("Clutterfunk", "Waterflame"),
    ("Theory of Everything", "DJ-Nate"),
    ("Electroman Adventures", "Waterflame"),
    ("Clubstep", "DJ-Nate"),
    ("Electrodynamix", "DJ-Nate"),
    ("Hexagon Force", "Waterflame"),
    ("Blast Processing", "Waterflame"),
    ("Theory of Everything 2", "DJ-Nate"),
    ("Geometrical Dominator", "Waterflame"),
    ("Deadlocked", "F-777"),
    ("Fingerdash", "MDK"),
];

impl Song {
    /// Assemble a custom song from its record
    pub fn from_record(record: &Record, config: &DecodeConfig) -> Result<Self> {
        let id: i64 = record.parse(SongField::Id)?;
        let quoted = record.require(SongField::Url)?;
        let download_url = urlencoding::decode(quoted)
            .map_err(|_| DecodeError::invalid(SongField::Url, quoted, "percent-encoded URL"))?
            .into_owned();

        trace!("Assembled song {id}");
        Ok(Self {
            id,
            name: record.require(SongField::Name)?.to_string(),
            author: record.require(SongField::Author)?.to_string(),
            size: record.parse(SongField::Size)?,
            page_url: Some(format!("{}{id}", config.song_page_url)),
            download_url: Some(download_url),
            custom: true,
        })
    }

    /// Built-in track at `index`; unknown indices get a placeholder
    pub fn official(index: i64) -> Self {
        let (name, author) = usize::try_from(index)
            .ok()
            .and_then(|i| OFFICIAL_SONGS.get(i))
            .copied()
            .unwrap_or(("Unknown", "Unknown"));

        Self {
            id: index,
            name: name.to_string(),
            author: author.to_string(),
            size: 0.0,
            page_url: None,
            download_url: None,
            custom: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Parser;

    fn song_parser() -> Parser {
        Parser::new().split_on("~|~").pair_split()
    }

    #[test]
    fn test_custom_song() {
        let record = song_parser()
            .run("1~|~467339~|~2~|~At the Speed of Light~|~3~|~50531~|~4~|~Dimrain47~|~5~|~9.56~|~10~|~https%3A%2F%2Faudio.ngfiles.com%2F467000%2F467339_At_the_Speed_of_Light_FINA.mp3")
            .expect("Test operation should succeed");
        let song = Song::from_record(&record, &DecodeConfig::default())
            .expect("Test operation should succeed");

        assert_eq!(song.id, 467339);
        assert_eq!(song.name, "At the Speed of Light");
        assert_eq!(song.author, "Dimrain47");
        assert!((song.size - 9.56).abs() < f64::EPSILON);
        assert_eq!(
            song.download_url.as_deref(),
            Some("https://audio.ngfiles.com/467000/467339_At_the_Speed_of_Light_FINA.mp3")
        );
        assert_eq!(
            song.page_url.as_deref(),
            Some("https://www.newgrounds.com/audio/listen/467339")
        );
        assert!(song.custom);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let record = song_parser()
            .run("1~|~1~|~2~|~a~|~4~|~b~|~5~|~1.0")
            .expect("Test operation should succeed");
        let err = Song::from_record(&record, &DecodeConfig::default()).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { tag: 10, .. }));
    }

    #[test]
    fn test_bad_size_is_an_error() {
        let record = song_parser()
            .run("1~|~1~|~2~|~a~|~4~|~b~|~5~|~huge~|~10~|~x")
            .expect("Test operation should succeed");
        let err = Song::from_record(&record, &DecodeConfig::default()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidValue { tag: 5, .. }));
    }

    #[test]
    fn test_official_songs() {
        let song = Song::official(0);
        assert_eq!(song.name, "Stereo Madness");
        assert!(!song.custom);
        assert!(song.download_url.is_none());

        assert_eq!(Song::official(20).author, "MDK");
        assert_eq!(Song::official(99).name, "Unknown");
        assert_eq!(Song::official(-1).name, "Unknown");
    }
}
