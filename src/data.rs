use crate::quiz::{Answer, Question};

const QUESTIONS: &[(&str, Answer)] = &[
    ("A slug's blood is green.", Answer::True),
    ("The loudest animal is the African Elephant.", Answer::False),
    ("Approximately one quarter of human bones are in the feet.", Answer::True),
    ("The total surface area of a human's lungs is the size of a football pitch.", Answer::True),
    ("In West Virginia, USA, if you accidentally hit an animal with your car, you are free to take it home to eat.", Answer::True),
    ("In London, UK, if you happen to die in the House of Parliament, you are entitled to a state funeral.", Answer::False),
    ("It is illegal to pee in the ocean in Portugal.", Answer::True),
    ("You can lead a cow down stairs but not up stairs.", Answer::False),
    ("Google was originally called 'Backrub'.", Answer::True),
    ("Buzz Aldrin's mother's maiden name was 'Moon'.", Answer::True),
    ("No piece of square dry paper can be folded in half more than 7 times.", Answer::False),
    ("A few ounces of chocolate can kill a small dog.", Answer::True),
];

/// The question bank compiled into the binary.
pub fn default_questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(text, answer)| Question::new(text, answer))
        .collect()
}
