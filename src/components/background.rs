use yew::prelude::*;

// (star count, star size px, drift duration s, seed) per layer
const STAR_LAYERS: [(usize, u32, u32, u32); 3] = [(700, 1, 50, 7), (200, 2, 100, 13), (100, 3, 150, 29)];

const FIELD_PX: u32 = 2000;

/// Comma-separated `box-shadow` list scattering `count` stars over the field.
/// Deterministic for a given seed so the sky doesn't change between loads.
pub fn star_shadows(count: usize, seed: u32) -> String {
    let mut state = seed.max(1);
    let mut next = move || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state % FIELD_PX
    };
    (0..count)
        .map(|_| {
            let x = next();
            let y = next();
            format!("{}px {}px #fff", x, y)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[function_component(BackgroundEffects)]
pub fn background_effects() -> Html {
    let layers = STAR_LAYERS
        .iter()
        .enumerate()
        .map(|(i, (count, size, duration, seed))| {
            let style = format!(
                "width: {size}px; height: {size}px; box-shadow: {}; animation-duration: {duration}s;",
                star_shadows(*count, *seed)
            );
            html! { <div class={format!("stars stars-{}", i + 1)} style={style} /> }
        })
        .collect::<Html>();

    html! {
        <div class="background-effects">
            <div class="stars-container">{ layers }</div>
            <style>
                {r#"
                .background-effects {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }

                .stars {
                    position: absolute;
                    top: 0;
                    left: 0;
                    background: transparent;
                    border-radius: 50%;
                    animation-name: starDrift;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                .stars-2 { opacity: 0.7; }
                .stars-3 { opacity: 0.5; }

                @keyframes starDrift {
                    from { transform: translateY(0); }
                    to { transform: translateY(-2000px); }
                }
                "#}
            </style>
        </div>
    }
}
