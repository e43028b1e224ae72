//! The `quizmark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizmark.toml
    if std::path::Path::new("quizmark.toml").exists() {
        println!("quizmark.toml already exists, skipping.");
    } else {
        std::fs::write("quizmark.toml", SAMPLE_CONFIG)?;
        println!("Created quizmark.toml");
    }

    // Create sample data tables
    std::fs::create_dir_all("data")?;
    for (name, content) in [
        ("data/questions.csv", SAMPLE_QUESTIONS),
        ("data/answers.csv", SAMPLE_ANSWERS),
        ("data/responses.csv", SAMPLE_RESPONSES),
    ] {
        if std::path::Path::new(name).exists() {
            println!("{name} already exists, skipping.");
        } else {
            std::fs::write(name, content)?;
            println!("Created {name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Replace the data/*.csv tables with your own");
    println!("  2. Run: quizmark validate");
    println!("  3. Run: quizmark export --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmark configuration

questions = "data/questions.csv"
answers = "data/answers.csv"
responses = "data/responses.csv"
output_dir = "quizmark-results"
rule = "negative-marking"
"#;

const SAMPLE_QUESTIONS: &str = "\
id,text,options,correct,marks,penalty
Q1,Which planet is closest to the sun?,Mercury|Venus|Earth,Mercury,2,0.5
Q2,How many continents are there?,5|6|7,7,1,0
Q3,What is 9 * 7?,56|63|72,63,1,0.25
";

const SAMPLE_ANSWERS: &str = "\
id,correct
Q1,Mercury
Q2,7
Q3,63
";

const SAMPLE_RESPONSES: &str = "\
student,question,chosen
alice,Q1,Mercury
alice,Q2,7
alice,Q3,56
bob,Q1,venus
bob,Q3,63
carol,Q1,MERCURY
carol,Q2,
";
