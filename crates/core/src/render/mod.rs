//! Per-frame draw instructions for the mouse sketch.
//!
//! The core never draws anything itself. Each frame it composes a
//! [`FramePlan`] from the controller state, and a host renderer walks the
//! instruction list and paints it with whatever canvas it has.

use serde::Serialize;

use crate::{
    audio::{AudioSource, LevelProbe},
    controller::{ChannelViz, Zone, ZoneAudioController},
    mapping::LevelScale,
};

/// Text shown at the top of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Banner {
    /// "Click anywhere to start" — shown until the activation gesture.
    StartPrompt,
    /// "Click to pause audio".
    PauseHint,
    /// "Click to resume audio".
    ResumeHint,
}

/// One thing the host renderer should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Instruction {
    Banner(Banner),
    /// Horizontal midline separating the two zones.
    Divider,
    /// Pulsing circle sized from the channel's live level.
    ActivityCircle { zone: Zone, diameter: f32 },
    /// Static circle plus "PAUSED" label for the suspended channel.
    PausedBadge { zone: Zone, diameter: f32 },
}

/// Ordered list of draw instructions for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FramePlan {
    instructions: Vec<Instruction>,
}

impl FramePlan {
    /// Composes the frame for the current controller state.
    ///
    /// Before activation the plan is nothing but the start prompt. After
    /// activation it carries the pause/resume hint, the zone divider, and
    /// one visualization instruction per channel that has something to
    /// show.
    pub fn compose<T>(controller: &ZoneAudioController<T>, scale: &LevelScale) -> Self
    where
        T: AudioSource + LevelProbe,
    {
        let mut instructions = Vec::new();

        if !controller.started() {
            instructions.push(Instruction::Banner(Banner::StartPrompt));
            return Self { instructions };
        }

        let hint = if controller.paused() {
            Banner::ResumeHint
        } else {
            Banner::PauseHint
        };
        instructions.push(Instruction::Banner(hint));
        instructions.push(Instruction::Divider);

        for zone in [Zone::Top, Zone::Bottom] {
            match controller.viz_for(zone) {
                ChannelViz::Live { level } => instructions.push(Instruction::ActivityCircle {
                    zone,
                    diameter: scale.diameter_for(level),
                }),
                ChannelViz::Paused => instructions.push(Instruction::PausedBadge {
                    zone,
                    diameter: scale.paused_diameter,
                }),
                ChannelViz::Hidden => {}
            }
        }

        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::sim::SimulatedTrack,
        config::AudioConfig,
        controller::{Pointer, ZoneAudioController},
        Result,
    };

    fn controller() -> ZoneAudioController<SimulatedTrack> {
        ZoneAudioController::new(
            SimulatedTrack::tone(256, 4.0).unwrap(),
            SimulatedTrack::tone(256, 4.0).unwrap(),
            Box::new(|| -> Result<()> { Ok(()) }),
            &AudioConfig::default(),
        )
        .unwrap()
    }

    fn pointer_top() -> Pointer {
        Pointer::new(100.0, 850.0)
    }

    #[test]
    fn start_prompt_is_the_only_instruction_before_activation() {
        let controller = controller();
        let plan = FramePlan::compose(&controller, &LevelScale::default());
        assert_eq!(
            plan.instructions(),
            &[Instruction::Banner(Banner::StartPrompt)]
        );
    }

    #[test]
    fn active_frame_has_hint_divider_and_circle() {
        let mut controller = controller();
        controller.on_release(pointer_top()).unwrap();
        controller.on_pointer_update(pointer_top()).unwrap();

        let plan = FramePlan::compose(&controller, &LevelScale::default());
        let instructions = plan.instructions();
        assert_eq!(instructions[0], Instruction::Banner(Banner::PauseHint));
        assert_eq!(instructions[1], Instruction::Divider);
        assert!(matches!(
            instructions[2],
            Instruction::ActivityCircle {
                zone: Zone::Top,
                ..
            }
        ));
        assert_eq!(instructions.len(), 3);
    }

    #[test]
    fn paused_frame_shows_the_badge_and_resume_hint() {
        let mut controller = controller();
        controller.on_release(pointer_top()).unwrap();
        controller.on_pointer_update(pointer_top()).unwrap();
        controller.on_release(pointer_top()).unwrap();

        let plan = FramePlan::compose(&controller, &LevelScale::default());
        let instructions = plan.instructions();
        assert_eq!(instructions[0], Instruction::Banner(Banner::ResumeHint));
        assert!(instructions.contains(&Instruction::PausedBadge {
            zone: Zone::Top,
            diameter: 50.0,
        }));
    }

    #[test]
    fn idle_channels_emit_no_visualization() {
        let mut controller = controller();
        controller.on_release(pointer_top()).unwrap();

        let plan = FramePlan::compose(&controller, &LevelScale::default());
        assert_eq!(
            plan.instructions(),
            &[Instruction::Banner(Banner::PauseHint), Instruction::Divider]
        );
    }

    #[test]
    fn circle_diameter_tracks_the_live_level() {
        let mut controller = controller();
        controller.on_release(pointer_top()).unwrap();
        controller.on_pointer_update(pointer_top()).unwrap();

        let scale = LevelScale::default();
        let plan = FramePlan::compose(&controller, &scale);
        let diameter = plan
            .instructions()
            .iter()
            .find_map(|instruction| match instruction {
                Instruction::ActivityCircle { diameter, .. } => Some(*diameter),
                _ => None,
            })
            .expect("active channel should emit a circle");
        assert!((scale.min_diameter..=scale.max_diameter).contains(&diameter));
    }
}
