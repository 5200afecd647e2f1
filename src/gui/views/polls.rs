use super::{card, empty_state, page_header, search_box};
use crate::filter;
use crate::gui::state::{Action, AppState, PollsTab, ProposalEntry};
use crate::models::poll::Poll;
use crate::models::state::VoteChoice;
use crate::vote::poll::option_percentage;
use std::collections::HashMap;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, pending: &mut Vec<Action>) {
    let page = &mut state.polls;

    page_header(
        ui,
        "Community Polls & Proposals",
        "Share your opinion on neighborhood decisions and vote on community ideas",
    );

    ui.horizontal(|ui| {
        search_box(ui, &mut page.query, "Search polls and proposals...");
        ui.add_space(12.0);
        ui.selectable_value(&mut page.tab, PollsTab::Polls, "Official Polls");
        ui.selectable_value(&mut page.tab, PollsTab::Proposals, "Community Proposals");
    });
    ui.separator();

    match page.tab {
        PollsTab::Polls => {
            let mut shown = 0;
            for poll in &page.polls {
                if !filter::matches_query(poll, &page.query) {
                    continue;
                }
                shown += 1;
                if poll_card(ui, poll, &mut page.selections) {
                    pending.push(Action::SubmitPoll {
                        poll_id: poll.id.clone(),
                    });
                }
            }
            if shown == 0 {
                empty_state(ui, "No polls match your search");
            }
        }
        PollsTab::Proposals => {
            let mut shown = 0;
            for entry in &page.proposals {
                if !filter::matches_query(&entry.proposal, &page.query) {
                    continue;
                }
                shown += 1;
                if let Some(choice) = proposal_card(ui, entry) {
                    pending.push(Action::VoteProposal {
                        proposal_id: entry.proposal.id.clone(),
                        choice,
                    });
                }
            }
            if shown == 0 {
                empty_state(ui, "No proposals match your search");
            }
            how_proposals_work(ui);
        }
    }
}

/// Returns true when the submit button was clicked.
fn poll_card(ui: &mut egui::Ui, poll: &Poll, selections: &mut HashMap<String, String>) -> bool {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(&poll.question);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(poll.days_left_label());
            });
        });
        ui.add_space(4.0);

        let selected = selections
            .get(&poll.id)
            .or(poll.user_vote.as_ref())
            .cloned();
        for option in &poll.options {
            let is_selected = selected.as_deref() == Some(option.id.as_str());
            if ui.radio(is_selected, &option.text).clicked() {
                selections.insert(poll.id.clone(), option.id.clone());
            }
            if poll.has_voted {
                let percent = option_percentage(poll, option);
                ui.add(
                    egui::ProgressBar::new(percent as f32 / 100.0)
                        .desired_width(320.0)
                        .text(format!("{percent}% ({} votes)", option.votes)),
                );
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.weak(format!("{} votes", poll.total_votes));
            let label = if poll.has_voted {
                "Update Vote"
            } else {
                "Submit Vote"
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled(selected.is_some(), egui::Button::new(label))
                    .clicked()
            })
            .inner
        })
        .inner
    })
}

fn proposal_card(ui: &mut egui::Ui, entry: &ProposalEntry) -> Option<VoteChoice> {
    let votes = &entry.votes;
    card(ui, |ui| {
        ui.strong(&entry.proposal.title);
        ui.weak(format!(
            "Proposed by {} · {}",
            entry.proposal.author, entry.proposal.date
        ));
        ui.horizontal(|ui| {
            let mut choice = None;
            let up = format!("👍 {}", votes.upvotes);
            if ui
                .selectable_label(votes.user_vote == Some(VoteChoice::Up), up)
                .clicked()
            {
                choice = Some(VoteChoice::Up);
            }
            let down = format!("👎 {}", votes.downvotes);
            if ui
                .selectable_label(votes.user_vote == Some(VoteChoice::Down), down)
                .clicked()
            {
                choice = Some(VoteChoice::Down);
            }
            choice
        })
        .inner
    })
}

fn how_proposals_work(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    egui::CollapsingHeader::new("How Community Proposals Work")
        .id_salt("proposals-help")
        .show(ui, |ui| {
            ui.label("1. Any resident can submit an idea for their neighborhood.");
            ui.label("2. Neighbors upvote or downvote proposals they care about.");
            ui.label("3. Popular proposals are reviewed by the city council.");
            ui.label("Click your vote again to remove it.");
        });
}
