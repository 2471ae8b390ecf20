use log::debug;
use lumiere::{nalgebra::RealField, DegenerateSegment, Emitter, Point, Scene, Trace};

use crate::{Color, Config};

/// What a click does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    PlaceEmitter,
    DrawSegment,
}

impl Mode {
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::PlaceEmitter => Self::DrawSegment,
            Self::DrawSegment => Self::PlaceEmitter,
        }
    }
}

/// Progress of the two-click segment drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineDraw<S: RealField + Copy> {
    Idle,
    /// The first click landed here
    AwaitingSecondClick(Point<S>),
}

/// An input event, as reported by a front end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input<S: RealField + Copy> {
    Click(Point<S>),
    ToggleMode,
    Trace,
    Quit,
}

/// How the editor reacted to an [`Input`], for the front end to display.
#[derive(Clone, Debug, PartialEq)]
pub enum Response<S: RealField + Copy> {
    /// A new emitter was placed, at this index in [`Editor::emitters`]
    EmitterPlaced(usize),
    /// Every color of the palette is taken
    EmitterRejected,
    /// First end of a segment recorded
    SegmentStarted(Point<S>),
    /// A segment was added, at this index in the scene
    SegmentAdded(usize),
    /// Both clicks landed at the same spot, nothing was added
    SegmentDiscarded,
    /// The mode changed to this one
    ModeChanged(Mode),
    /// The path of every emitter's ray, in placement order. The session is over.
    Traced(Vec<(Color, Trace<S>)>),
    /// The session is over, without tracing
    Quit,
    /// The session was already over, the input was ignored
    Finished,
}

/// The setup phase of a session: emitters and segments are added
/// by clicking, until rays are traced or the user quits.
#[derive(Clone, Debug)]
pub struct Editor<S: RealField + Copy> {
    config: Config<S>,
    scene: Scene<S>,
    emitters: Vec<Emitter<S, Color>>,
    mode: Mode,
    line: LineDraw<S>,
    finished: bool,
}

impl<S: RealField + Copy> Editor<S> {
    /// Starts a session, with an empty canvas of the configured size.
    ///
    /// Fails if the canvas has no area.
    pub fn new(config: Config<S>) -> Result<Self, DegenerateSegment> {
        Ok(Self {
            scene: Scene::new(config.width, config.height)?,
            config,
            emitters: Vec::new(),
            mode: Mode::PlaceEmitter,
            line: LineDraw::Idle,
            finished: false,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config<S> {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn scene(&self) -> &Scene<S> {
        &self.scene
    }

    #[inline]
    #[must_use]
    pub fn emitters(&self) -> &[Emitter<S, Color>] {
        &self.emitters
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn line(&self) -> &LineDraw<S> {
        &self.line
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn handle(&mut self, input: Input<S>) -> Response<S> {
        if self.finished {
            return Response::Finished;
        }

        match input {
            Input::Click(pos) => match self.mode {
                Mode::PlaceEmitter => self.place_emitter(pos),
                Mode::DrawSegment => self.click_segment(pos),
            },
            Input::ToggleMode => {
                self.mode = self.mode.toggled();
                self.line = LineDraw::Idle;
                debug!("switched to {:?}", self.mode);
                Response::ModeChanged(self.mode)
            }
            Input::Trace => {
                self.finished = true;
                Response::Traced(self.trace())
            }
            Input::Quit => {
                self.finished = true;
                Response::Quit
            }
        }
    }

    fn place_emitter(&mut self, corner: Point<S>) -> Response<S> {
        let Some(&color) = self.config.palette.get(self.emitters.len()) else {
            debug!("no color left for a new emitter");
            return Response::EmitterRejected;
        };

        debug!("placing {color} emitter at ({}, {})", corner.x, corner.y);

        self.emitters
            .push(Emitter::new(color, corner, self.config.emitter_size));
        Response::EmitterPlaced(self.emitters.len() - 1)
    }

    fn click_segment(&mut self, pos: Point<S>) -> Response<S> {
        match self.line {
            LineDraw::Idle => {
                self.line = LineDraw::AwaitingSecondClick(pos);
                Response::SegmentStarted(pos)
            }
            LineDraw::AwaitingSecondClick(start) => {
                self.line = LineDraw::Idle;
                match self.scene.add_segment(start, pos) {
                    Ok(index) => Response::SegmentAdded(index),
                    Err(DegenerateSegment) => {
                        debug!("discarding zero-length segment");
                        Response::SegmentDiscarded
                    }
                }
            }
        }
    }

    fn trace(&mut self) -> Vec<(Color, Trace<S>)> {
        let max_reflections = self.config.max_reflections;
        let scene = &self.scene;

        self.emitters
            .iter_mut()
            .map(|emitter| (emitter.color, emitter.trace(scene, max_reflections)))
            .collect()
    }
}
