use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::content::TESTIMONIALS;

/// Position the carousel shows after one rotation tick.
fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Auto-rotating carousel over the client testimonials. A fixed-period
/// interval advances the active slide for as long as the component is
/// mounted; picking an indicator dot jumps straight to that slide without
/// touching the interval, so the rotation keeps its original schedule.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0usize);
    // The interval closure outlives any single render, so it reads the
    // current position through this cell rather than a stale state handle.
    // Manual picks write the cell too, and the next tick advances from there.
    let cursor = use_state(|| Rc::new(Cell::new(0usize)));

    {
        let active = active.clone();
        let cursor = (*cursor).clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::TESTIMONIAL_ROTATE_MS, move || {
                    let next = next_index(cursor.get(), TESTIMONIALS.len());
                    cursor.set(next);
                    active.set(next);
                });

                move || {
                    drop(interval);
                }
            },
            (),
        );
    }

    let select = {
        let active = active.clone();
        let cursor = (*cursor).clone();
        Callback::from(move |index: usize| {
            cursor.set(index);
            active.set(index);
        })
    };

    let track_style = format!("transform: translateX(-{}%);", *active * 100);

    html! {
        <div class="carousel">
            <div class="carousel-track" style={track_style}>
                { TESTIMONIALS.iter().map(|testimonial| {
                    html! {
                        <div class="carousel-slide">
                            <div class="testimonial-card">
                                <img
                                    class="testimonial-avatar"
                                    src={testimonial.image}
                                    alt={testimonial.author}
                                    loading="lazy"
                                />
                                <div class="testimonial-body">
                                    <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
                                    <div class="testimonial-meta">
                                        <div class="testimonial-author">
                                            <p class="author-name">{testimonial.author}</p>
                                            <p class="author-role">{testimonial.role}</p>
                                        </div>
                                        <div class="testimonial-stat">
                                            <p class="stat-growth">{testimonial.growth}</p>
                                            <p class="stat-metric">{testimonial.metric}</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
            <div class="carousel-dots">
                { TESTIMONIALS.iter().enumerate().map(|(index, _)| {
                    let onclick = {
                        let select = select.clone();
                        Callback::from(move |_: MouseEvent| select.emit(index))
                    };
                    html! {
                        <button
                            class={classes!("carousel-dot", (index == *active).then(|| "active"))}
                            aria-label={format!("Show testimonial {}", index + 1)}
                            {onclick}
                        />
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_past_the_last_slide() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn rotation_cycles_every_slide_indefinitely() {
        let len = TESTIMONIALS.len();
        let mut index = 0;
        let mut seen = vec![false; len];
        for _ in 0..len * 2 {
            seen[index] = true;
            index = next_index(index, len);
        }
        assert_eq!(index, 0);
        assert!(seen.iter().all(|s| *s));
    }
}
