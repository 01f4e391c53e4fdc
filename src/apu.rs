// APU module - register sink and audio output seam
//
// Audio synthesis lives outside this core. The console still clocks the APU
// once per CPU cycle and the CPU bus still delivers register writes here,
// so a real synthesizer can be dropped in behind the `AudioSink` seam
// without touching the bus or the master loop.

use log::debug;

/// Destination for generated audio samples
///
/// The host installs a sink and drains samples at its own rate; the core
/// never blocks on audio.
pub trait AudioSink {
    /// Deliver one mono sample in the range [-1.0, 1.0]
    fn push_sample(&mut self, sample: f32);
}

/// APU structure: accepts register traffic and clocks, produces nothing
pub struct Apu {
    sink: Option<Box<dyn AudioSink>>,
    cycles: u64,
}

impl Apu {
    /// Create a new APU with no sink attached
    pub fn new() -> Self {
        Apu {
            sink: None,
            cycles: 0,
        }
    }

    /// Install the host's audio sink
    pub fn set_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.sink = Some(sink);
    }

    /// Advance one CPU cycle
    pub fn step(&mut self) {
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Total CPU cycles observed, for host pacing
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Accept a write to $4000-$4013, $4015 or $4017
    ///
    /// Registers are accepted and dropped; games configure channels freely
    /// without aborting emulation.
    pub fn write_register(&mut self, addr: u16, data: u8) {
        debug!("APU register write: ${:04X} = ${:02X}", addr, data);
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
