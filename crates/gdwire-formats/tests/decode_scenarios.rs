#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end decoding of server response shapes
//!
//! Each test feeds raw response text through the parser and assembler the
//! way a client would, and checks the resulting domain objects.

use std::sync::Arc;
use std::thread;

use gdwire_crypto::{CipherPurpose, coder, zip_level_data};
use gdwire_formats::index::{CommentField, LevelField, RequestField};
use gdwire_formats::model::{CommentType, Direction, GauntletKind, LevelDifficulty, WireEnum};
use gdwire_formats::{
    AbstractUser, Color, Comment, DecodeConfig, DecodeError, Field, FriendRequest, Gauntlet, Level,
    LevelPage, MapPack, Message, Parser, Record, Song,
};
use pretty_assertions::assert_eq;

const SONG: &str = "1~|~810215~|~2~|~TestSong~|~3~|~9~|~4~|~TestAuthor~|~5~|~1024.5~|~10~|~http%3A%2F%2Fexample.test%2Fsong.mp3";

const LEVEL: &str = "1:5001:2:Wire Test:5:3:6:77:8:10:9:40:10:1200:12:0:13:21:14:300:16:12:17:0:43:0:25:0:18:8:19:1:42:0:45:2500:3:QSBsZXZlbA==:15:3:30:0:31:0:37:2:38:1:39:8:35:810215";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn colon_record(raw: &str) -> Record {
    Parser::new()
        .split_on(":")
        .pair_split()
        .run(raw)
        .expect("record should parse")
}

fn song() -> Song {
    let record = Parser::new()
        .split_on("~|~")
        .pair_split()
        .run(SONG)
        .expect("song should parse");
    Song::from_record(&record, &DecodeConfig::default()).expect("song should assemble")
}

fn level(record: &Record) -> Result<Level, DecodeError> {
    Level::from_record(
        record,
        Arc::new(song()),
        Arc::new(AbstractUser::new("Creator", 77, 700)),
        &DecodeConfig::default(),
    )
}

// --- Songs ---

#[test]
fn song_record_decodes_url_and_size() {
    init_tracing();

    assert_eq!(
        song(),
        Song {
            id: 810_215,
            name: "TestSong".to_string(),
            author: "TestAuthor".to_string(),
            size: 1024.5,
            page_url: Some("https://www.newgrounds.com/audio/listen/810215".to_string()),
            download_url: Some("http://example.test/song.mp3".to_string()),
            custom: true,
        }
    );
}

#[test]
fn song_page_url_follows_config() {
    let config = DecodeConfig::from_json(r#"{"song_page_url": "https://mirror.test/audio/"}"#)
        .expect("config should load");
    let record = Parser::new()
        .split_on("~|~")
        .pair_split()
        .run(SONG)
        .expect("song should parse");
    let song = Song::from_record(&record, &config).expect("song should assemble");
    assert_eq!(song.page_url.as_deref(), Some("https://mirror.test/audio/810215"));
}

// --- Messages and friend requests ---

#[test]
fn message_direction_follows_indicator_parity() {
    init_tracing();
    let counterpart = Parser::new()
        .split_on(":")
        .pair_split()
        .run("1:Receiver:2:20:16:200")
        .expect("fragment should parse");

    for (indicator, author, recipient) in [(0, "Sender", "Receiver"), (1, "Receiver", "Sender"), (2, "Sender", "Receiver")] {
        let record = colon_record(&format!(
            "1:31:2:100:3:10:4:UmU6IGxldmVs:6:Sender:7:1 week:8:1:9:{indicator}"
        ));
        let message = Message::from_records(&record, &counterpart).expect("message should assemble");

        assert_eq!(message.author.name, author, "indicator {indicator}");
        assert_eq!(message.recipient.name, recipient, "indicator {indicator}");
        assert_eq!(message.subject, "Re: level");
        assert!(message.is_read);
    }
}

#[test]
fn outgoing_friend_request_swaps_identities() {
    let record = Parser::new()
        .split_on(":")
        .pair_split()
        .merge_extra([(RequestField::Indicator.tag(), "1")])
        .run("1:Target:2:30:16:300:32:12:35:YWRkIG1l:37:2 days:41:0")
        .expect("request should parse");
    let me = Arc::new(AbstractUser::new("Me", 5, 50));

    let request = FriendRequest::from_parts(&record, Arc::clone(&me)).expect("request should assemble");
    assert_eq!(request.direction, Direction::Outgoing);
    assert_eq!(request.author, me);
    assert_eq!(*request.recipient, AbstractUser::new("Target", 30, 300));
    assert_eq!(request.body, "add me");
    assert!(request.is_read);
}

// --- Levels ---

#[test]
fn downloaded_level_decodes_all_sub_payloads() {
    init_tracing();
    let mut record = colon_record(LEVEL);
    record.insert(
        LevelField::Password.tag(),
        coder::encode_str(CipherPurpose::LevelPassword, "1"),
    );
    record.insert(
        LevelField::Data.tag(),
        zip_level_data("kS38,1_40_2_125;1,1,2,15,3,15;").expect("data should compress"),
    );

    let level = level(&record).expect("level should assemble");
    assert_eq!(level.description, "A level");
    assert_eq!(level.password.as_deref(), Some(""));
    assert_eq!(level.data.as_deref(), Some("kS38,1_40_2_125;1,1,2,15,3,15;"));
    assert_eq!(level.difficulty, LevelDifficulty::Harder);
    assert_eq!(level.rating, 300);
    assert_eq!(level.song.id, 810_215);
    assert!(level.verified_coins);
    assert!(level.is_featured());
}

#[test]
fn search_level_has_no_data_or_password() {
    let level = level(&colon_record(LEVEL)).expect("level should assemble");
    assert_eq!(level.data, None);
    assert_eq!(level.password, None);
}

#[test]
fn corrupt_level_data_is_a_codec_error_not_absence() {
    let mut record = colon_record(LEVEL);
    record.insert(LevelField::Data.tag(), "not*base64");

    let err = level(&record).expect_err("corrupt data must fail");
    assert!(matches!(err, DecodeError::Codec { tag: 4, .. }), "{err}");
}

#[test]
fn missing_mandatory_field_names_the_tag() {
    let record: Record = colon_record(LEVEL)
        .iter()
        .filter(|(tag, _)| *tag != LevelField::Downloads.tag())
        .map(|(tag, value)| (tag, value.to_string()))
        .collect();

    let err = level(&record).expect_err("missing downloads must fail");
    assert_eq!(err.to_string(), "Missing field downloads (tag 10) in level record");
}

#[test]
fn malformed_optional_field_falls_back() {
    let mut record = colon_record(LEVEL);
    record.insert(LevelField::ObjectCount.tag(), "many");
    record.insert(LevelField::Dislikes.tag(), "");

    let level = level(&record).expect("level should assemble");
    assert_eq!(level.object_count, 0);
    assert_eq!(level.rating, 300);
}

#[test]
fn extreme_like_counts_do_not_overflow() {
    let mut record = colon_record(LEVEL);
    record.insert(LevelField::Likes.tag(), "9223372036854775807");
    record.insert(LevelField::Dislikes.tag(), "-1");

    let level = level(&record).expect("level should assemble");
    assert_eq!(level.rating, i64::MAX);
}

#[test]
fn timely_fields_are_merged_extensions() {
    let record = Parser::new()
        .split_on(":")
        .pair_split()
        .merge_extra([(LevelField::TimelyType.tag(), "1"), (LevelField::TimelyCooldown.tag(), "3600")])
        .run(&format!("{LEVEL}:41:1042"))
        .expect("level should parse");

    let level = level(&record).expect("level should assemble");
    assert!(level.is_timely());
    assert_eq!(level.timely_index, 1042);
    assert_eq!(level.cooldown, 3600);
}

#[test]
fn level_page_links_creators_and_songs() {
    init_tracing();
    let text = format!("{LEVEL}#77:Creator:700#{SONG}#1:0:10");
    let page = LevelPage::parse(&text, &DecodeConfig::default()).expect("page should decode");

    assert_eq!(page.levels.len(), 1);
    assert_eq!(*page.levels[0].creator, AbstractUser::new("Creator", 77, 700));
    assert_eq!(*page.levels[0].song, song());
}

// --- Comments ---

#[test]
fn comment_defaults() {
    let record = Parser::new()
        .split_on("~")
        .pair_split()
        .merge_extra([(CommentField::Type.tag(), CommentType::Level.value().to_string())])
        .run("2~bmljZQ==~3~10~4~5~6~1~9~now")
        .expect("comment should parse");
    let author = Parser::new()
        .split_on("~")
        .pair_split()
        .run("1~Poster~16~100")
        .expect("author should parse");

    let comment = Comment::from_records(&record, &author).expect("comment should assemble");
    assert_eq!(comment.body, "nice");
    assert_eq!(comment.color, Color::WHITE);
    assert_eq!(comment.level_id, 0);
    assert_eq!(comment.level_percentage, -1);
    assert_eq!(*comment.author, AbstractUser::new("Poster", 10, 100));
}

// --- Packs ---

#[test]
fn pack_lists_are_decoded_lazily() {
    let response = "1:1:2:Pack A:3:1,2,3:4:4:5:1:6:1:7:255,0,0|1:2:2:Pack B:4:6:5:1|bogus";
    let parser = Parser::new().split_on(":").pair_split();

    let packs: Vec<MapPack> = parser
        .run_many(response, "|")
        .map(|record| MapPack::from_record(&record))
        .collect::<Result<_, _>>()
        .expect("packs should assemble");

    assert_eq!(packs.len(), 2);
    assert_eq!(packs[0].color, Color::from_rgb(255, 0, 0));
    assert_eq!(packs[1].level_ids, vec![0, 0, 0]);
}

#[test]
fn gauntlet_name_comes_from_theme() {
    let gauntlet = Gauntlet::from_record(&colon_record("1:4")).expect("gauntlet should assemble");
    assert_eq!(gauntlet.kind, GauntletKind::Shadow);
    assert_eq!(gauntlet.name, "Shadow Gauntlet");
    assert_eq!(gauntlet.level_ids, vec![0; 5]);
}

// --- Concurrency ---

#[test]
fn decoding_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Parser>();
    assert_send_sync::<Level>();
    assert_send_sync::<LevelPage>();
    assert_send_sync::<DecodeError>();

    let parser = Arc::new(Parser::new().split_on(":").pair_split());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let record = parser.run(&format!("{LEVEL}:1:{i}")).expect("level should parse");
                level(&record).expect("level should assemble").id
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker should not panic"))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..8).collect::<Vec<_>>());
}
