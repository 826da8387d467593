use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config;
use crate::utils::rotation::use_rotation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: Option<&'static str>,
    pub photo: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub id: &'static str,
    pub heading: &'static str,
    pub testimonials: &'static [Testimonial],
    #[prop_or(config::TESTIMONIAL_ROTATION_MS)]
    pub period_ms: u32,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let rotation = use_rotation(props.testimonials.len(), props.period_ms);
    let Some(current) = props.testimonials.get(rotation.index) else {
        return html! {};
    };

    let onmouseenter = {
        let set_paused = rotation.set_paused.clone();
        Callback::from(move |_: MouseEvent| set_paused.emit(true))
    };
    let onmouseleave = {
        let set_paused = rotation.set_paused.clone();
        Callback::from(move |_: MouseEvent| set_paused.emit(false))
    };
    let prev = rotation.prev.reform(|_: MouseEvent| ());
    let next = rotation.next.reform(|_: MouseEvent| ());

    let testimonials_css = r#"
        .testimonials-section {
            padding: 6rem 2rem;
            background: linear-gradient(180deg, #0d0806 0%, #1a0f09 100%);
        }
        .testimonials-content {
            max-width: 900px;
            margin: 0 auto;
            text-align: center;
        }
        .testimonials-content h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.5rem;
            margin-bottom: 3rem;
            color: #fff3d6;
        }
        .testimonial {
            min-height: 260px;
            padding: 2.5rem;
            border-radius: 20px;
            background: rgba(30, 18, 12, 0.75);
            border: 1px solid rgba(245, 192, 107, 0.15);
            animation: testimonial-in 0.6s ease;
        }
        @keyframes testimonial-in {
            from { opacity: 0; transform: translateX(20px); }
            to { opacity: 1; transform: translateX(0); }
        }
        .testimonial blockquote {
            font-size: 1.25rem;
            line-height: 1.7;
            color: #e8d9c7;
            font-style: italic;
            margin: 0 0 1.5rem;
        }
        .testimonial-author {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 1rem;
            color: #f5c06b;
        }
        .testimonial-author img {
            width: 56px;
            height: 56px;
            border-radius: 50%;
            object-fit: cover;
        }
        .testimonial-role {
            display: block;
            color: #b89f86;
            font-size: 0.85rem;
        }
        .carousel-controls {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 1.5rem;
            margin-top: 2rem;
        }
        .carousel-arrow {
            background: none;
            border: 1px solid rgba(245, 192, 107, 0.4);
            color: #f5c06b;
            width: 44px;
            height: 44px;
            border-radius: 50%;
            cursor: pointer;
            font-size: 1.1rem;
        }
        .carousel-dots {
            display: flex;
            gap: 0.6rem;
        }
        .carousel-dot {
            width: 10px;
            height: 10px;
            border-radius: 50%;
            border: none;
            padding: 0;
            background: rgba(245, 192, 107, 0.3);
            cursor: pointer;
            transition: background 0.3s ease, transform 0.3s ease;
        }
        .carousel-dot.active {
            background: #ff6a1a;
            transform: scale(1.3);
        }
    "#;
    html! {
        <section class="testimonials-section" id={props.id}>
            <style>{testimonials_css}</style>
            <div class="testimonials-content" {onmouseenter} {onmouseleave}>
                <h2>{props.heading}</h2>
                <FadeIn>
                    <div class="testimonial" key={rotation.index}>
                        <blockquote>{current.quote}</blockquote>
                        <div class="testimonial-author">
                            if let Some(photo) = current.photo {
                                <img src={photo} alt={current.author} loading="lazy" />
                            }
                            <span>
                                {current.author}
                                if let Some(role) = current.role {
                                    <span class="testimonial-role">{role}</span>
                                }
                            </span>
                        </div>
                    </div>
                </FadeIn>
                if rotation.len > 1 {
                    <div class="carousel-controls">
                        <button class="carousel-arrow" aria-label="Previous testimonial" onclick={prev}>{"‹"}</button>
                        <div class="carousel-dots">
                            { for (0..rotation.len).map(|i| {
                                let go_to = rotation.go_to.clone();
                                html! {
                                    <button
                                        class={classes!("carousel-dot", (i == rotation.index).then(|| "active"))}
                                        aria-label={format!("Show testimonial {}", i + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| go_to.emit(i))}
                                    ></button>
                                }
                            }) }
                        </div>
                        <button class="carousel-arrow" aria-label="Next testimonial" onclick={next}>{"›"}</button>
                    </div>
                }
            </div>
        </section>
    }
}
