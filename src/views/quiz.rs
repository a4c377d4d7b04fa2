use maud::{html, Markup};

use crate::{
    names,
    services::quiz::{RunSummary, StepView},
    views::components,
};

pub fn start_page() -> Markup {
    html! {
        h1 { "Welcome to the quiz" }
        article style="width: fit-content;" {
            form method="post" action=(names::QUIZ_START_URL) {
                label {
                    "Your name"
                    input name="name" type="text" required autofocus;
                }
                input type="submit" value="Start";
            }
        }
    }
}

pub fn step(view: &StepView) -> Markup {
    let action = names::quiz_step_url(view.step);

    html! {
        article style="width: fit-content;" {
            (components::progress(view.step, view.total))

            h3 { (view.question) }

            form method="post" action=(action) id="question-form" {
                fieldset {
                    @for option in &view.options {
                        label {
                            input type="radio" name="answer" value=(option) required;
                            (option)
                        }
                    }
                }
                @if view.step < view.total {
                    input type="submit" value="Next";
                } @else {
                    input type="submit" value="Finish";
                }
            }
        }
    }
}

pub fn summary(summary: &RunSummary) -> Markup {
    html! {
        h1 { "Well done, " (summary.name) "!" }
        p {
            "You scored "
            mark { (summary.score) " / " (summary.total) }
        }

        article {
            table {
                thead { tr {
                    th { "Question" }
                    th { "Your answer" }
                    th { "Correct answer" }
                    th {}
                } }
                tbody {
                    @for answer in &summary.history {
                        tr {
                            td { (answer.question) }
                            td { (answer.submitted) }
                            td { (answer.correct_answer) }
                            td {
                                @if answer.is_correct { "\u{2705}" } @else { "\u{274C}" }
                            }
                        }
                    }
                }
            }
        }

        (components::nav_link(names::QUIZ_START_URL, html! { "Play again" }))
    }
}
