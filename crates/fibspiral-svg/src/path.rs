//! Path data (`d` attribute) builder.

/// A single path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M 0 0`, written with bare integer zeros
    MoveToOrigin,
    /// `A rx ry rotation large-arc sweep x y`
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
}

/// Fluent builder for SVG path data.
///
/// Numbers are not formatted until [`PathData::format_with`] is called, so the
/// caller decides the numeric precision of the emitted `d` string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the origin
    pub fn m0(mut self) -> Self {
        self.commands.push(PathCommand::MoveToOrigin);
        self
    }

    /// Elliptical arc to an absolute point
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize to a `d` string.
    ///
    /// `num` formats arc end points and radii. The origin move is always the
    /// literal `M 0 0`, arc rotation an integer number of degrees and the arc
    /// flags `0`/`1`.
    pub fn format_with(&self, num: impl Fn(f64) -> String) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            let part = match *cmd {
                PathCommand::MoveToOrigin => "M 0 0".to_string(),
                PathCommand::Arc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => format!(
                    "A {} {} {:.0} {} {} {} {}",
                    num(rx),
                    num(ry),
                    x_axis_rotation,
                    u8::from(large_arc),
                    u8::from(sweep),
                    num(x),
                    num(y)
                ),
            };
            parts.push(part);
        }
        parts.join(" ")
    }
}
