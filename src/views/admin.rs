use maud::{html, Markup};

use crate::{
    db::{QuestionModel, ResultModel},
    names,
    views::components::nav_link,
};

pub fn question_list(questions: &[QuestionModel]) -> Markup {
    html! {
        h1 { "Questions" }
        p { (nav_link(names::ADD_QUESTION_URL, html! { "Add a question" })) }

        @if questions.is_empty() {
            p { "No questions yet." }
        } @else {
            article {
                table {
                    thead { tr {
                        th { "#" }
                        th { "Question" }
                        th { "Options" }
                        th { "Answer" }
                    } }
                    tbody {
                        @for q in questions {
                            tr {
                                td { (q.id) }
                                td { (q.text) }
                                td {
                                    ul {
                                        @for option in q.options() {
                                            li { (option) }
                                        }
                                    }
                                }
                                td { mark { (q.answer) } }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn add_form() -> Markup {
    html! {
        h1 { "Add a question" }
        article {
            form method="post" action=(names::ADD_QUESTION_URL) {
                label {
                    "Question"
                    input name="text" type="text" required;
                }
                @for i in 1..=names::OPTIONS_PER_QUESTION {
                    label {
                        "Option " (i)
                        input name=(format!("option_{i}")) type="text" required;
                    }
                }
                label {
                    "Correct answer (must match one option exactly)"
                    input name="answer" type="text" required;
                }
                input type="submit" value="Save";
            }
        }
    }
}

pub fn ranking(results: &[ResultModel]) -> Markup {
    html! {
        h1 { "Ranking" }

        @if results.is_empty() {
            p { "Nobody has finished the quiz yet." }
        } @else {
            article {
                table {
                    thead { tr {
                        th { "Place" }
                        th { "Name" }
                        th { "Score" }
                        th { "Date" }
                    } }
                    tbody {
                        @for (place, r) in results.iter().enumerate() {
                            tr {
                                td { (place + 1) }
                                td { (r.name) }
                                td { (r.score) " / " (r.total) }
                                td { (r.created_at) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn qr_code(image_url: &str, link: &str) -> Markup {
    html! {
        h1 { "Quiz QR code" }
        article style="width: fit-content; text-align: center;" {
            img src=(image_url) alt="QR code for the quiz start page" width="240" height="240";
            p { code { (link) } }
        }
    }
}
