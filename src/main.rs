use std::sync::Arc;

use flavor_quiz::config::BotConfig;
use flavor_quiz::quiz::flavors::{self, Flavor};
use flavor_quiz::quiz::results::{self, QuizResult};
use flavor_quiz::quiz::{Question, Quiz, QuizError, QuizSession};
use log::{error, info, warn};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup},
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    /// `position` indexes the question currently on screen.
    TakingQuiz {
        session: QuizSession,
        position: usize,
    },
    Finished,
}

type DialogueStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    pretty_env_logger::init();
    let config = BotConfig::from_env()?;
    info!("Starting flavor quiz bot...");

    let bot = Bot::new(config.token);

    info!("Opening dialogue storage at {}", config.db_path.display());
    let storage: DialogueStorage = SqliteStorage::open(&config.db_path.to_string_lossy(), Json)
        .await?
        .erase();

    let quiz = Arc::new(Quiz::standard());
    info!("Loaded {} questions", quiz.questions().len());

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(
                dptree::case![State::TakingQuiz { session, position }].endpoint(take_quiz),
            )
            .branch(dptree::case![State::Finished].endpoint(finished)),
    )
    .dependencies(dptree::deps![storage, quiz])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

const GREETING_TEXT: &str = "Hey! Which Tim's Nacho Cheese flavor are you? Answer 7 quick questions and find out.";
const BACK: &str = "⬅️ Back";
const AGAIN: &str = "Take the quiz again";
const PICK_AN_ANSWER: &str = "Pick one of the answers on the keyboard 👇";

/// `/start` in any state starts a fresh quiz. Telegram may append the bot
/// name (`/start@flavor_quiz_bot`) or a deep-link payload.
fn is_restart(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .and_then(|command| command.split('@').next())
        .is_some_and(|command| command == "/start")
}

async fn start(bot: Bot, dialogue: QuizDialogue, quiz: Arc<Quiz>, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;
    begin(&bot, &dialogue, &quiz, msg.chat.id).await
}

async fn begin(bot: &Bot, dialogue: &QuizDialogue, quiz: &Quiz, chat_id: ChatId) -> HandlerResult {
    ask(bot, quiz, chat_id, 0).await?;
    dialogue
        .update(State::TakingQuiz {
            session: QuizSession::new(),
            position: 0,
        })
        .await?;
    Ok(())
}

async fn ask(bot: &Bot, quiz: &Quiz, chat_id: ChatId, position: usize) -> HandlerResult {
    let Some(question) = quiz.questions().get(position) else {
        return Ok(());
    };

    let text = format!(
        "{} Question {} of {}\n{}",
        question.emoji,
        position + 1,
        quiz.questions().len(),
        question.text
    );
    bot.send_message(chat_id, text)
        .reply_markup(answer_keyboard(question, position > 0))
        .await?;
    Ok(())
}

fn answer_keyboard(question: &Question, with_back: bool) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = question
        .answers
        .iter()
        .map(|a| vec![KeyboardButton::new(a.text.clone())])
        .collect();
    if with_back {
        rows.push(vec![KeyboardButton::new(BACK)]);
    }
    KeyboardMarkup::new(rows)
}

async fn take_quiz(
    bot: Bot,
    dialogue: QuizDialogue,
    quiz: Arc<Quiz>,
    (session, position): (QuizSession, usize),
    msg: Message,
) -> HandlerResult {
    let mut session = session;

    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, PICK_AN_ANSWER).await?;
        return ask(&bot, &quiz, msg.chat.id, position).await;
    };

    if is_restart(text) {
        return begin(&bot, &dialogue, &quiz, msg.chat.id).await;
    }

    if text == BACK {
        let position = position.saturating_sub(1);
        ask(&bot, &quiz, msg.chat.id, position).await?;
        dialogue
            .update(State::TakingQuiz { session, position })
            .await?;
        return Ok(());
    }

    if let Some(question) = quiz.questions().get(position) {
        let recorded = match question.answer_index(text) {
            Some(index) => quiz.record_answer(&mut session, question.id, index),
            None => Err(QuizError::InvalidSelection {
                question_id: question.id,
                answer_index: question.answers.len(),
            }),
        };
        if let Err(e) = recorded {
            warn!("Rejected answer {:?}: {}", text, e);
            bot.send_message(msg.chat.id, PICK_AN_ANSWER).await?;
            return ask(&bot, &quiz, msg.chat.id, position).await;
        }
    }

    let next = position + 1;
    if next < quiz.questions().len() {
        ask(&bot, &quiz, msg.chat.id, next).await?;
        dialogue
            .update(State::TakingQuiz {
                session,
                position: next,
            })
            .await?;
        return Ok(());
    }

    match quiz.compute_result(&session) {
        Ok(flavor_id) => {
            send_result(&bot, msg.chat.id, &flavor_id).await?;
            dialogue.update(State::Finished).await?;
        }
        Err(QuizError::IncompleteQuiz { .. }) => {
            // Only reachable with a stale stored session; resume at the first gap.
            let position = quiz
                .next_unanswered(&session)
                .and_then(|q| quiz.questions().iter().position(|p| p.id == q.id))
                .unwrap_or(0);
            bot.send_message(msg.chat.id, "A few answers went missing, let's fill them in.")
                .await?;
            ask(&bot, &quiz, msg.chat.id, position).await?;
            dialogue
                .update(State::TakingQuiz { session, position })
                .await?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn send_result(bot: &Bot, chat_id: ChatId, flavor_id: &str) -> HandlerResult {
    let again = KeyboardMarkup::new(vec![vec![KeyboardButton::new(AGAIN)]]);

    let copy = match results::lookup_result_copy(flavor_id) {
        Ok(copy) => copy,
        Err(e) => {
            error!("Result table out of sync with quiz flavors: {}", e);
            bot.send_message(
                chat_id,
                "Something went wrong working out your flavor. Please try again!",
            )
            .reply_markup(again)
            .await?;
            return Ok(());
        }
    };

    let text = result_message(copy, flavors::find_flavor(flavor_id));
    bot.send_message(chat_id, text).reply_markup(again).await?;
    Ok(())
}

fn result_message(copy: &QuizResult, flavor: Option<&Flavor>) -> String {
    let mut text = format!(
        "{} You are {}!\n\n{}\n\n{}",
        copy.emoji, copy.title, copy.vibe, copy.description
    );
    if let Some(flavor) = flavor {
        text.push_str(&format!(
            "\n\nYour sauce: {} {} [{}] heat: {}",
            flavor.emoji,
            flavor.name,
            flavor.badge,
            flavor.heat_label()
        ));
        if flavor.is_star {
            text.push_str("\n⭐ Fan favourite");
        }
    }
    text
}

async fn finished(bot: Bot, dialogue: QuizDialogue, quiz: Arc<Quiz>, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(text) if text == AGAIN || is_restart(text) => {
            begin(&bot, &dialogue, &quiz, msg.chat.id).await
        }
        _ => {
            let keyboard = KeyboardMarkup::new(vec![vec![KeyboardButton::new(AGAIN)]]);
            bot.send_message(msg.chat.id, "Want another go?")
                .reply_markup(keyboard)
                .await?;
            Ok(())
        }
    }
}
