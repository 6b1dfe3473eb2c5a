/// Acceleration capability, resolved once at startup and injected through
/// [`Settings`](super::settings::Settings).
///
/// No accelerator kernels are linked today: the probe exists so the CLI
/// can report what a deployment would use and so tests can exercise both
/// branches. Whatever the probe says, batch execution falls back to the
/// CPU pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Cpu,
    Gpu,
}

impl Backend {
    /// Resolve the capability for this process. `ODDSMITH_DEVICE=gpu`
    /// claims an accelerator; anything else is CPU.
    pub fn probe() -> Self {
        match std::env::var("ODDSMITH_DEVICE").as_deref() {
            Ok("gpu") => Self::Gpu,
            _ => Self::Cpu,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Gpu => write!(f, "gpu"),
        }
    }
}
