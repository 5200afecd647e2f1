use super::toast::Toasts;
use crate::api;
use crate::api::initiatives::InitiativeDraft;
use crate::api::issues::IssueDraft;
use crate::config::Config;
use crate::data::ReferenceData;
use crate::filter::{Allowed, Criteria, CriteriaFor};
use crate::models::auth::LoginRequest;
use crate::models::events::Notification;
use crate::models::initiative::Initiative;
use crate::models::issue::{Issue, IssueCategory, IssueStatus};
use crate::models::legislation::LegislationItem;
use crate::models::poll::{Poll, Proposal};
use crate::models::state::{ProposalVoteState, VoteChoice};
use crate::models::Facet;
use crate::route::Route;
use crate::vote;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

/// Something the user asked for while a frame was being drawn. Views queue
/// these and the shell applies them once drawing is done.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    ShowNotifications,
    OpenLoginPopup,
    SubmitLogin { popup: bool },
    SignOut,
    VoteProposal { proposal_id: String, choice: VoteChoice },
    SubmitPoll { poll_id: String },
    SendMessage { representative_id: String },
    JoinInitiative { initiative_id: String },
    CreateInitiative,
    ReportIssue,
}

pub struct HomePage {
    /// `None` shows issues from every neighborhood.
    pub neighborhood_id: Option<String>,
}

pub struct IssuesPage {
    pub criteria: CriteriaFor<Issue>,
    /// Tab below the filters; `None` is "All Issues".
    pub tab: Option<IssueStatus>,
    pub report_open: bool,
    pub draft: IssueDraft,
}

pub struct LegislationPage {
    pub criteria: CriteriaFor<LegislationItem>,
    /// Bills whose full legal summary is expanded.
    pub expanded: HashSet<String>,
}

pub struct RepresentativesPage {
    pub query: String,
    /// Unsent message per representative id.
    pub drafts: HashMap<String, String>,
    pub dialog_for: Option<String>,
}

pub struct InitiativesPage {
    pub criteria: CriteriaFor<Initiative>,
    pub create_open: bool,
    pub draft: InitiativeDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Quarter,
        Timeframe::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Week => "Last Week",
            Timeframe::Month => "Last Month",
            Timeframe::Quarter => "Last Quarter",
            Timeframe::Year => "Last Year",
        }
    }
}

pub struct ImpactPage {
    pub neighborhood: Option<String>,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollsTab {
    #[default]
    Polls,
    Proposals,
}

pub struct ProposalEntry {
    pub proposal: Proposal,
    pub votes: ProposalVoteState,
}

pub struct PollsPage {
    pub query: String,
    pub tab: PollsTab,
    pub polls: Vec<Poll>,
    /// Radio selection per poll id, not yet submitted.
    pub selections: HashMap<String, String>,
    pub proposals: Vec<ProposalEntry>,
}

pub struct AppState {
    pub data: &'static ReferenceData,
    pub route: Route,
    pub toasts: Toasts,
    pub home: HomePage,
    pub issues: IssuesPage,
    pub legislation: LegislationPage,
    pub representatives: RepresentativesPage,
    pub initiatives: InitiativesPage,
    pub impact: ImpactPage,
    pub polls: PollsPage,
    pub login_page: LoginRequest,
    pub login_popup: LoginRequest,
    pub login_popup_open: bool,
    pub signed_in_as: Option<String>,
}

impl AppState {
    pub fn new(data: &'static ReferenceData, config: &Config) -> Self {
        let polls = data.polls();
        let selections = polls
            .iter()
            .filter_map(|poll| Some((poll.id.clone(), poll.user_vote.clone()?)))
            .collect();
        let proposals = data
            .proposals()
            .into_iter()
            .map(|proposal| ProposalEntry {
                votes: ProposalVoteState::from(&proposal),
                proposal,
            })
            .collect();

        Self {
            data,
            route: config.start_route,
            toasts: Toasts::new(config.toast_duration),
            home: HomePage {
                neighborhood_id: data.neighborhoods().first().map(|n| n.id.clone()),
            },
            issues: IssuesPage {
                // checkbox families start with every box ticked
                criteria: Criteria {
                    query: String::new(),
                    statuses: Allowed::only(IssueStatus::ALL.iter().copied()),
                    categories: Allowed::only(IssueCategory::ALL.iter().copied()),
                    neighborhoods: Allowed::only(data.neighborhood_names()),
                },
                tab: None,
                report_open: false,
                draft: IssueDraft::default(),
            },
            legislation: LegislationPage {
                criteria: Criteria::default(),
                expanded: HashSet::new(),
            },
            representatives: RepresentativesPage {
                query: String::new(),
                drafts: HashMap::new(),
                dialog_for: None,
            },
            initiatives: InitiativesPage {
                criteria: Criteria::default(),
                create_open: false,
                draft: InitiativeDraft::default(),
            },
            impact: ImpactPage {
                neighborhood: None,
                timeframe: Timeframe::default(),
            },
            polls: PollsPage {
                query: String::new(),
                tab: PollsTab::default(),
                polls,
                selections,
                proposals,
            },
            login_page: LoginRequest::default(),
            login_popup: LoginRequest::default(),
            login_popup_open: false,
            signed_in_as: None,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        if notification.is_destructive() {
            warn!("{}: {}", notification.title, notification.description);
        } else {
            info!("{}: {}", notification.title, notification.description);
        }
        self.toasts.push(notification);
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?}", action);
        match action {
            Action::Navigate(route) => self.navigate(route),
            Action::ShowNotifications => self.notify(api::notifications()),
            Action::OpenLoginPopup => self.login_popup_open = true,
            Action::SubmitLogin { popup } => self.submit_login(popup),
            Action::SignOut => {
                self.signed_in_as = None;
                self.notify(Notification::info("Signed out", "See you soon!"));
            }
            Action::VoteProposal { proposal_id, choice } => {
                self.vote_proposal(&proposal_id, choice)
            }
            Action::SubmitPoll { poll_id } => self.submit_poll(&poll_id),
            Action::SendMessage { representative_id } => self.send_message(&representative_id),
            Action::JoinInitiative { initiative_id } => self.join_initiative(&initiative_id),
            Action::CreateInitiative => self.create_initiative(),
            Action::ReportIssue => self.report_issue(),
        }
    }

    fn navigate(&mut self, route: Route) {
        if self.route != route {
            info!("Navigating {} -> {}", self.route, route);
            self.route = route;
        }
        self.login_popup_open = false;
    }

    fn submit_login(&mut self, popup: bool) {
        let request = if popup {
            &self.login_popup
        } else {
            &self.login_page
        };
        match api::auth::login(request) {
            Ok(notification) => {
                self.signed_in_as = Some(request.email.trim().to_owned());
                if popup {
                    self.login_popup = LoginRequest::default();
                } else {
                    self.login_page = LoginRequest::default();
                }
                self.notify(notification);
                self.navigate(Route::Home);
            }
            Err(error) => self.notify(Notification::from(&error)),
        }
    }

    fn vote_proposal(&mut self, proposal_id: &str, choice: VoteChoice) {
        let Some(entry) = self
            .polls
            .proposals
            .iter_mut()
            .find(|entry| entry.proposal.id == proposal_id)
        else {
            warn!("Vote for unknown proposal {proposal_id}");
            return;
        };

        let transition = vote::quick::cast(&entry.votes, choice);
        entry.votes = transition.state;
        debug!(
            "Proposal vote {}",
            serde_json::to_string(&transition.event).unwrap_or_default()
        );
        self.notify(transition.event.notification());
    }

    fn submit_poll(&mut self, poll_id: &str) {
        let selected = self.polls.selections.get(poll_id).cloned();
        let Some(poll) = self.polls.polls.iter_mut().find(|poll| poll.id == poll_id) else {
            warn!("Vote for unknown poll {poll_id}");
            return;
        };

        match vote::poll::submit_vote(poll, selected.as_deref()) {
            Ok(transition) => {
                *poll = transition.state;
                debug!(
                    "Poll vote {}",
                    serde_json::to_string(&transition.event).unwrap_or_default()
                );
                self.notify(transition.event.notification());
            }
            Err(error) => self.notify(Notification::from(&error)),
        }
    }

    fn send_message(&mut self, representative_id: &str) {
        let representatives = self.data.representatives();
        let Some(representative) = representatives
            .iter()
            .find(|representative| representative.id == representative_id)
        else {
            warn!("Message for unknown representative {representative_id}");
            return;
        };

        let body = self
            .representatives
            .drafts
            .get(representative_id)
            .cloned()
            .unwrap_or_default();
        match api::messages::send_message(representative, &body) {
            Ok(notification) => {
                self.representatives.drafts.remove(representative_id);
                self.representatives.dialog_for = None;
                self.notify(notification);
            }
            Err(error) => self.notify(Notification::from(&error)),
        }
    }

    fn join_initiative(&mut self, initiative_id: &str) {
        let initiatives = self.data.initiatives();
        match initiatives.iter().find(|initiative| initiative.id == initiative_id) {
            Some(initiative) => self.notify(api::initiatives::join_initiative(initiative)),
            None => warn!("Join for unknown initiative {initiative_id}"),
        }
    }

    fn create_initiative(&mut self) {
        match api::initiatives::create_initiative(&self.initiatives.draft) {
            Ok(notification) => {
                self.initiatives.draft = InitiativeDraft::default();
                self.initiatives.create_open = false;
                self.notify(notification);
            }
            Err(error) => self.notify(Notification::from(&error)),
        }
    }

    fn report_issue(&mut self) {
        match api::issues::report_issue(&self.issues.draft) {
            Ok(notification) => {
                self.issues.draft = IssueDraft::default();
                self.issues.report_open = false;
                self.notify(notification);
            }
            Err(error) => self.notify(Notification::from(&error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::filter;

    fn state() -> AppState {
        AppState::new(data::reference_data().unwrap(), &Config::default())
    }

    fn last_title(state: &AppState) -> Option<&str> {
        state.toasts.latest().map(|n| n.title.as_str())
    }

    #[test]
    fn issues_start_with_every_box_ticked() {
        let state = state();
        let issues = state.data.issues();

        assert_eq!(filter::apply(&issues, &state.issues.criteria).len(), issues.len());
        assert_eq!(state.home.neighborhood_id.as_deref(), Some("1"));
    }

    #[test]
    fn unticking_a_neighborhood_hides_its_issues() {
        let mut state = state();
        let names = state.data.neighborhood_names();
        state
            .issues
            .criteria
            .neighborhoods
            .toggle("Downtown".to_owned(), names);

        let issues = state.data.issues();
        let visible = filter::apply(&issues, &state.issues.criteria);
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|issue| issue.neighborhood != "Downtown"));
    }

    #[test]
    fn poll_without_selection_warns_and_keeps_counts() {
        let mut state = state();
        let before = state.polls.polls[0].clone();

        state.dispatch(Action::SubmitPoll {
            poll_id: "1".to_owned(),
        });

        assert_eq!(state.polls.polls[0], before);
        assert_eq!(last_title(&state), Some("No option selected"));
        assert!(state.toasts.latest().unwrap().is_destructive());
    }

    #[test]
    fn poll_vote_updates_the_session_copy_only() {
        let mut state = state();
        state
            .polls
            .selections
            .insert("1".to_owned(), "1-2".to_owned());

        state.dispatch(Action::SubmitPoll {
            poll_id: "1".to_owned(),
        });

        let poll = &state.polls.polls[0];
        assert_eq!(poll.total_votes, 101);
        assert_eq!(poll.options[1].votes, 34);
        assert_eq!(poll.user_vote.as_deref(), Some("1-2"));
        assert_eq!(last_title(&state), Some("Vote submitted!"));
        assert_eq!(state.data.polls()[0].total_votes, 100);
    }

    #[test]
    fn proposal_votes_toggle() {
        let mut state = state();
        let vote = |choice| Action::VoteProposal {
            proposal_id: "p2".to_owned(),
            choice,
        };

        state.dispatch(vote(VoteChoice::Up));
        assert_eq!(state.polls.proposals[1].votes.upvotes, 43);
        assert_eq!(last_title(&state), Some("Vote recorded"));

        state.dispatch(vote(VoteChoice::Down));
        assert_eq!(state.polls.proposals[1].votes.upvotes, 42);
        assert_eq!(state.polls.proposals[1].votes.downvotes, 8);
        assert_eq!(last_title(&state), Some("Vote changed"));

        state.dispatch(vote(VoteChoice::Down));
        assert_eq!(state.polls.proposals[1].votes.downvotes, 7);
        assert_eq!(state.polls.proposals[1].votes.user_vote, None);
        assert_eq!(last_title(&state), Some("Vote removed"));
    }

    #[test]
    fn login_page_success_goes_home() {
        let mut state = state();
        state.dispatch(Action::Navigate(Route::Login));
        state.login_page.email = "resident@example.com".to_owned();
        state.login_page.password = "secret".to_owned();

        state.dispatch(Action::SubmitLogin { popup: false });

        assert_eq!(state.route, Route::Home);
        assert_eq!(state.signed_in_as.as_deref(), Some("resident@example.com"));
        assert_eq!(last_title(&state), Some("Login successful"));
        assert!(state.login_page.password.is_empty());
    }

    #[test]
    fn failed_popup_login_keeps_the_popup_open() {
        let mut state = state();
        state.dispatch(Action::OpenLoginPopup);
        state.login_popup.email = "resident@example.com".to_owned();

        state.dispatch(Action::SubmitLogin { popup: true });

        assert!(state.login_popup_open);
        assert_eq!(state.signed_in_as, None);
        assert_eq!(last_title(&state), Some("Login failed"));
    }

    #[test]
    fn empty_message_keeps_the_dialog_open() {
        let mut state = state();
        state.representatives.dialog_for = Some("2".to_owned());
        state
            .representatives
            .drafts
            .insert("2".to_owned(), "   ".to_owned());

        state.dispatch(Action::SendMessage {
            representative_id: "2".to_owned(),
        });
        assert_eq!(state.representatives.dialog_for.as_deref(), Some("2"));

        state
            .representatives
            .drafts
            .insert("2".to_owned(), "Thanks for the clean-up!".to_owned());
        state.dispatch(Action::SendMessage {
            representative_id: "2".to_owned(),
        });
        assert_eq!(state.representatives.dialog_for, None);
        assert!(state.representatives.drafts.is_empty());
        assert_eq!(last_title(&state), Some("Message Sent"));
    }

    #[test]
    fn join_and_notifications_only_toast() {
        let mut state = state();
        state.dispatch(Action::JoinInitiative {
            initiative_id: "3".to_owned(),
        });
        assert_eq!(last_title(&state), Some("Success!"));

        state.dispatch(Action::ShowNotifications);
        assert_eq!(last_title(&state), Some("Notifications"));
        assert_eq!(state.toasts.len(), 2);
    }
}
