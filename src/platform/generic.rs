// Fallback provider for platforms without a dedicated one (BSDs, illumos, ...)

use super::{CommandRunner, OsFamily, PlatformProbes};

pub struct GenericProbes {
    runner: CommandRunner,
}

impl GenericProbes {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }
}

impl PlatformProbes for GenericProbes {
    fn family(&self) -> OsFamily {
        OsFamily::Other
    }

    fn runner(&self) -> &CommandRunner {
        &self.runner
    }
}
