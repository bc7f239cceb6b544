//! Results view: a bundle annotated with display scores.
//!
//! The percentages are presentational. They decrease linearly with list
//! position and are not computed from the profile.

use serde::Serialize;

use crate::models::profile::Profile;
use crate::recommendations::catalog::{lookup, resolve, Course, RecommendationBundle};

const MATCH_BASE: u32 = 95;
const MATCH_STEP: u32 = 5;
const SKILL_BASE: u32 = 85;
const SKILL_STEP: u32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct CareerMatch {
    pub rank: usize,
    pub title: &'static str,
    pub match_percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapStep {
    pub step: usize,
    pub phase: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub name: String,
    /// Interest key whose bundle was served.
    pub interest: &'static str,
    pub interest_label: &'static str,
    /// True when the profile's interest had no bundle of its own.
    pub fallback: bool,
    pub experience_label: Option<&'static str>,
    pub education_label: Option<&'static str>,
    pub careers: Vec<CareerMatch>,
    pub skill_gaps: Vec<SkillGap>,
    pub roadmap: Vec<RoadmapStep>,
    pub courses: &'static [Course],
}

pub fn match_percent(index: usize) -> u32 {
    linear_score(MATCH_BASE, MATCH_STEP, index)
}

pub fn skill_gap_percent(index: usize) -> u32 {
    linear_score(SKILL_BASE, SKILL_STEP, index)
}

fn linear_score(base: u32, step: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_sub(step.saturating_mul(index))
}

pub fn annotate(
    bundle: &'static RecommendationBundle,
) -> (Vec<CareerMatch>, Vec<SkillGap>, Vec<RoadmapStep>) {
    let careers = bundle
        .careers
        .iter()
        .enumerate()
        .map(|(i, &title)| CareerMatch {
            rank: i + 1,
            title,
            match_percent: match_percent(i),
        })
        .collect();

    let skill_gaps = bundle
        .skills
        .iter()
        .enumerate()
        .map(|(i, &skill)| SkillGap {
            skill,
            percent: skill_gap_percent(i),
        })
        .collect();

    let roadmap = bundle
        .roadmap
        .iter()
        .enumerate()
        .map(|(i, phase)| RoadmapStep {
            step: i + 1,
            phase: phase.phase,
            items: phase.items,
        })
        .collect();

    (careers, skill_gaps, roadmap)
}

/// Builds the results page for a submitted profile.
pub fn build_report(profile: &Profile) -> RecommendationReport {
    let served = resolve(&profile.interests);
    let bundle = lookup(&profile.interests);
    let (careers, skill_gaps, roadmap) = annotate(bundle);

    RecommendationReport {
        name: profile.name.clone(),
        interest: served.key(),
        interest_label: served.label(),
        fallback: profile.interest_area() != Some(served),
        experience_label: profile.experience_band().map(|b| b.label()),
        education_label: profile.education_level().map(|e| e.label()),
        careers,
        skill_gaps,
        roadmap,
        courses: bundle.courses,
    }
}
