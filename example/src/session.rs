use tessera_multi_slider::{DragController, PointerPosition, SliderModel, ValueChanged};
use tracing::info;

/// Height of the demo control; the track runs along its center line.
const CONTROL_HEIGHT: f32 = 20.0;

/// A pointer event as a host would decode it, in control coordinates.
#[derive(Debug, Clone, Copy)]
pub enum Gesture {
    Press { x: f32, y: f32 },
    Move { x: f32 },
    Release,
    Cancel,
}

pub struct Session {
    slider: SliderModel<&'static str>,
    drag: DragController,
}

impl Session {
    pub fn new(slider: SliderModel<&'static str>) -> Self {
        let drag = DragController::new().on_change(|event: &ValueChanged| {
            let phase = if event.committed { "committed" } else { "moving" };
            info!(id = %event.id, value = event.value, "{phase}");
        });
        Self { slider, drag }
    }

    pub fn play(&mut self, gestures: &[Gesture]) {
        for &gesture in gestures {
            self.apply(gesture);
        }
    }

    fn apply(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Press { x, y } => {
                let pointer = PointerPosition::new(x, y - CONTROL_HEIGHT / 2.0);
                if self.drag.begin(&self.slider, pointer).is_none() {
                    info!(x, y, "press missed every thumb");
                }
            }
            Gesture::Move { x } => {
                self.drag.update(&mut self.slider, x);
            }
            Gesture::Release => {
                self.drag.end(&mut self.slider);
            }
            Gesture::Cancel => {
                self.drag.cancel();
            }
        }
    }

    pub fn report(&self) {
        for entry in self.slider.paint_order() {
            let Some(thumb) = self.slider.thumb(entry.id.as_str()) else {
                continue;
            };
            let subtrack = self
                .slider
                .subtrack(entry.id.as_str())
                .map_or(0.0, |span| span.length());
            info!(
                id = %entry.id,
                value = thumb.value(),
                position = thumb.position(),
                subtrack,
                color = *thumb.style(),
                subtrack_z = entry.subtrack_rank,
                thumb_z = entry.thumb_rank,
                "thumb"
            );
        }
    }
}
