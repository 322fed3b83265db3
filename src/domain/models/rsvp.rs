use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Attending {
    Yes,
    No,
}

impl Attending {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yes" => Some(Attending::Yes),
            "no" => Some(Attending::No),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealChoice {
    Beef,
    Chicken,
    Fish,
    Vegetarian,
    Vegan,
}

impl MealChoice {
    pub const ALL: [MealChoice; 5] = [
        MealChoice::Beef,
        MealChoice::Chicken,
        MealChoice::Fish,
        MealChoice::Vegetarian,
        MealChoice::Vegan,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beef" => Some(MealChoice::Beef),
            "chicken" => Some(MealChoice::Chicken),
            "fish" => Some(MealChoice::Fish),
            "vegetarian" => Some(MealChoice::Vegetarian),
            "vegan" => Some(MealChoice::Vegan),
            _ => None,
        }
    }
}

/// Raw form as posted by the invitation page. Every field is a string and
/// missing fields deserialize as empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub attending: String,
    pub meal_choice: String,
    pub plus_one_name: String,
    pub dietary_restrictions: String,
}

/// A validated, sanitized RSVP waiting for an id.
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub name: String,
    pub email: String,
    pub attending: Attending,
    pub meal_choice: Option<MealChoice>,
    pub plus_one_name: Option<String>,
    pub dietary_restrictions: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub attending: Attending,
    pub meal_choice: Option<MealChoice>,
    pub plus_one_name: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RsvpSubmission {
    pub fn from_new(id: String, new: NewRsvp, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            attending: new.attending,
            meal_choice: new.meal_choice,
            plus_one_name: new.plus_one_name,
            dietary_restrictions: new.dietary_restrictions,
            created_at,
        }
    }

    pub fn party_size(&self) -> u32 {
        match self.attending {
            Attending::No => 0,
            Attending::Yes if self.plus_one_name.is_some() => 2,
            Attending::Yes => 1,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct RsvpReceipt {
    pub id: String,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSummary {
    pub total_responses: u32,
    pub attending: u32,
    pub declined: u32,
    pub plus_ones: u32,
    pub expected_guests: u32,
    pub meals: Vec<MealCount>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MealCount {
    pub meal: MealChoice,
    pub count: u32,
}
