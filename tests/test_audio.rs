use std::io::{self, Write};

use coqui_hunt::audio::BellTrack;
use coqui_hunt::error::AudioError;

struct BrokenSpeaker;

impl Write for BrokenSpeaker {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "speaker unplugged"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn calls_loop_on_the_period() {
    let mut track = BellTrack::new(Vec::new(), 6.0, true);
    track.play_looping(0.0).unwrap();
    assert!(track.is_playing());

    track.update(3.0).unwrap();
    track.update(5.9).unwrap();
    track.update(6.0).unwrap();
    track.update(7.0).unwrap();
    track.update(12.0).unwrap();

    assert_eq!(track.into_inner(), b"\x07\x07\x07".to_vec());
}

#[test]
fn nothing_plays_before_start() {
    let mut track = BellTrack::new(Vec::new(), 6.0, true);
    track.update(100.0).unwrap();
    assert!(!track.is_playing());
    assert!(track.into_inner().is_empty());
}

#[test]
fn detached_terminal_reports_no_device() {
    let mut track = BellTrack::new(Vec::new(), 6.0, false);
    assert!(matches!(track.play_looping(0.0), Err(AudioError::NoDevice)));
    assert!(!track.is_playing());
    assert!(track.into_inner().is_empty());
}

#[test]
fn write_failure_surfaces_as_audio_error() {
    let mut track = BellTrack::new(BrokenSpeaker, 6.0, true);
    assert!(matches!(track.play_looping(0.0), Err(AudioError::Write(_))));
}
