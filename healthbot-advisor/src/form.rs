use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    ops::RangeInclusive,
    str::FromStr,
};

use colored::{Color, Colorize};
use healthbot_model::{
    bmi::ColorTag,
    profile::{
        ActivityLevel, DietType, UserProfile, AGE_RANGE, HEIGHT_CM_RANGE, SLEEP_HOURS_RANGE,
        WEIGHT_KG_RANGE,
    },
    Error, Result,
};
use itertools::Itertools;
use log::{info, warn};
use strum::IntoEnumIterator;

use crate::advisor::{Advice, Advisor};

fn terminal_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Green => Color::Green,
        ColorTag::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        ColorTag::Red => Color::Red,
    }
}

/// Empty answers take the default.
pub fn parse_number(
    answer: &str,
    default: u32,
    name: &str,
    range: &RangeInclusive<u32>,
) -> Result<u32> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    let value: u32 = answer.parse().map_err(|_| {
        Error::InvalidInput(format!("{} must be a whole number, got \"{}\"", name, answer))
    })?;
    if !range.contains(&value) {
        return Err(Error::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )));
    }
    Ok(value)
}

/// Accepts an option's text (any case) or its 1-based number; empty answers take the default.
pub fn parse_choice<T>(answer: &str, default: T) -> Result<T>
where
    T: IntoEnumIterator + FromStr + Display,
{
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    if let Ok(number) = answer.parse::<usize>() {
        if let Some(choice) = number.checked_sub(1).and_then(|i| T::iter().nth(i)) {
            return Ok(choice);
        }
    }
    T::from_str(answer).map_err(|_| {
        Error::InvalidInput(format!(
            "\"{}\" is not one of {}",
            answer,
            T::iter().join(", ")
        ))
    })
}

fn choice_prompt<T: IntoEnumIterator + Display>(label: &str) -> String {
    format!(
        "{}: {}",
        label,
        T::iter()
            .enumerate()
            .map(|(i, option)| format!("{}) {}", i + 1, option))
            .join(", ")
    )
}

/// Line-oriented form over any reader and writer.
pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns `None` once the input is exhausted.
    fn ask(&mut self, prompt: &str, default: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} [{}]: ", prompt, default)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail parsing like any other bad answer.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_owned()))
    }

    fn ask_until_valid<T>(
        &mut self,
        prompt: &str,
        default: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> io::Result<Option<T>> {
        while let Some(answer) = self.ask(prompt, default)? {
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    warn!("Rejected answer for {}: {}", prompt, e);
                    self.show_error(&e)?;
                }
            }
        }
        Ok(None)
    }

    fn ask_number(
        &mut self,
        prompt: &str,
        name: &str,
        default: u32,
        range: &RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        self.ask_until_valid(prompt, &default.to_string(), |answer| {
            parse_number(answer, default, name, range)
        })
    }

    fn ask_choice<T>(&mut self, label: &str, default: T) -> io::Result<Option<T>>
    where
        T: IntoEnumIterator + FromStr + Display + Copy,
    {
        self.ask_until_valid(&choice_prompt::<T>(label), &default.to_string(), |answer| {
            parse_choice(answer, default)
        })
    }

    pub fn read_profile(&mut self) -> io::Result<Option<UserProfile>> {
        let defaults = UserProfile::default();
        writeln!(self.output, "Enter your details below:")?;

        let Some(age) = self.ask_number("Age", "age", defaults.age(), &AGE_RANGE)? else {
            return Ok(None);
        };
        let Some(height) =
            self.ask_number("Height (cm)", "height", defaults.height_cm(), &HEIGHT_CM_RANGE)?
        else {
            return Ok(None);
        };
        let Some(weight) =
            self.ask_number("Weight (kg)", "weight", defaults.weight_kg(), &WEIGHT_KG_RANGE)?
        else {
            return Ok(None);
        };
        let Some(activity) =
            self.ask_choice::<ActivityLevel>("Activity Level", defaults.activity_level())?
        else {
            return Ok(None);
        };
        let Some(diet) = self.ask_choice::<DietType>("Diet Type", defaults.diet_type())? else {
            return Ok(None);
        };
        let Some(sleep) = self.ask_number(
            "Average Sleep Hours",
            "sleep hours",
            defaults.sleep_hours(),
            &SLEEP_HOURS_RANGE,
        )?
        else {
            return Ok(None);
        };

        match UserProfile::new(age, height, weight, activity, diet, sleep) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                self.show_error(&e)?;
                self.read_profile()
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let Some(answer) = self.ask(prompt, "Y/n")? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    pub fn show_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "AI Health & Diet Chatbot".bold())?;
        writeln!(
            self.output,
            "Get a BMI calculation, diet recommendations and activity plans based on your profile."
        )?;
        writeln!(self.output)
    }

    pub fn show_advice(&mut self, advice: &Advice) -> io::Result<()> {
        let color = terminal_color(advice.bmi.category().color());
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            format!("Your BMI: {}", advice.bmi).color(color).bold()
        )?;
        writeln!(self.output, "Personalized Recommendations")?;
        writeln!(self.output, "  Diet Plan:     {}", advice.recommendation.diet)?;
        writeln!(
            self.output,
            "  Activity Plan: {}",
            advice.recommendation.activity
        )?;
        writeln!(self.output)
    }

    pub fn show_error(&mut self, e: &Error) -> io::Result<()> {
        writeln!(self.output, "{}", e.to_string().red())
    }

    pub fn show_footer(&mut self) -> io::Result<()> {
        writeln!(self.output, "---")?;
        writeln!(
            self.output,
            "Developed as a college AI project for SDG 3: Good Health & Well-Being"
        )
    }
}

/// Serves one interaction after another until the input ends or the user stops.
pub fn run<R: BufRead, W: Write>(advisor: &Advisor, input: R, output: W) -> io::Result<()> {
    let mut form = Form::new(input, output);
    form.show_header()?;

    while let Some(profile) = form.read_profile()? {
        info!("Received profile {:?}", profile);
        match advisor.advise(&profile) {
            Ok(advice) => form.show_advice(&advice)?,
            Err(e) => {
                warn!("Failed to compute recommendations: {}", e);
                form.show_error(&e)?;
            }
        }
        if !form.confirm("Get another recommendation?")? {
            break;
        }
    }

    form.show_footer()
}
