//! Taunts, grouped into tiers of rising harshness.
//!
//! Tier `n` covers the player's `10n..10n+9`th cleared pipe; everything past
//! the last tier stays on the last tier.

use rand::Rng;

/// Pipes the player must clear to move up one tier.
pub const PIPES_PER_TIER: u32 = 10;

const MILD: &[&str] = &[
    "Is that all you've got?",
    "Your flapping is laughable!",
    "Even gravity's laughing at you.",
    "I expected more from you!",
    "Flap harder, maybe then you'll fly.",
    "That was weak, even a snail is faster.",
    "Your wings seem to be made of paper!",
    "Pathetic, you're barely getting off the ground!",
    "Even the breeze mocks your effort!",
    "Keep flapping, maybe you'll catch a gust!",
    "You're as threatening as a feather in the wind!",
    "Your flaps barely stir a breeze!",
    "Even sparrows scoff at your weak wings!",
    "Your attempt at flying is a total dud!",
    "You might as well be grounded—permanently!",
];

const SNIDE: &[&str] = &[
    "Your flapping is pathetic, try harder if you dare!",
    "You’re the epitome of mediocrity, flapping like a dead duck.",
    "Even gravity concedes defeat when watching you flounder.",
    "Your flapping style is as graceful as a fallen feather.",
    "A limp effort from a limp bird; step it up!",
    "Your performance leaves gravity unimpressed.",
    "Flap like you mean it, or not at all!",
    "That attempt was as feeble as a dying breeze.",
    "You call that flapping? I've seen better from a paper crane!",
    "Your wings are on vacation—come back to work!",
    "Your flapping is a monument to mediocrity, a pitiful display of wasted effort.",
    "Every flap you make mocks your potential—utterly disappointing!",
    "You’d embarrass a paper airplane with your feeble attempts.",
    "Even the clouds pity your half-hearted efforts.",
    "Your feeble flaps are a disgrace to the skies!",
];

const HARSH: &[&str] = &[
    "Your attempts are laughably futile, a true spectacle of failure!",
    "You flap with the grace of a drunken penguin on ice. Step up your game!",
    "Every moment you play, you prove that mediocrity is an art form.",
    "Your flight is an exercise in futility; every flap echoes defeat.",
    "Watching you struggle is like a bad comedy – unintentional and cringe-worthy.",
    "Your desperate flapping only serves to underline your impending doom.",
    "Your effort is so feeble that even the wind sighs in disappointment.",
    "Every flap seems to scream: 'I’m failing miserably!'",
    "Even a broken clock is more reliable than your flight!",
    "You’re a testament to how low effort can defy even gravity!",
    "Watching you fly is like witnessing a slow-motion train wreck of failure.",
    "Your flapping is so pitiful it could make a grown bird cry.",
    "Every desperate wingbeat is a symphony of your impending humiliation.",
    "You make failure look like an art form—if only it were intentional.",
    "Even the wind abandons you, leaving only echoes of your misery!",
];

const BRUTAL: &[&str] = &[
    "Your gameplay is a tragic comedy; even the pipes weep at your incompetence!",
    "An endless stream of failure, your flapping is a masterpiece of misfortune!",
    "As you soar in despair, know that every failed attempt is a monument to your hopelessness.",
    "You redefine failure with every pathetic flap – a true disgrace to the art of flying.",
    "Even the skies refuse to hold you up; your efforts are a cosmic joke.",
    "In a universe of champions, you are a lone, tragic figure of despair.",
    "Your flapping is an epic tragedy, a symphony of failure and mockery!",
    "Every attempt is a glorious failure – a masterpiece of ineptitude!",
    "The heavens mourn your futile efforts as you defy all expectations of mediocrity.",
    "Your flight is a saga of shame, each flap etching another line in your epic downfall!",
    "Your flight is an opera of agony—a tragic ballad of ineptitude and despair!",
    "Even the darkest abyss laughs at the pitiful spectacle of your flight.",
    "Your incompetence soars to new heights, leaving a trail of shattered dreams in its wake!",
    "Every flap is a dirge, a mournful reminder of your eternal failure.",
    "You are the living embodiment of hopelessness—a beacon for every wailing soul in despair!",
];

/// Indexed by tier; adding a bank here adds a tier.
pub const TIERS: [&[&str]; 4] = [MILD, SNIDE, HARSH, BRUTAL];

pub const TIER_COUNT: usize = TIERS.len();

/// Harshness bracket for the given number of cleared pipes.
pub fn tier_for(pipes_crossed: u32) -> usize {
    ((pipes_crossed / PIPES_PER_TIER) as usize).min(TIER_COUNT - 1)
}

/// Uniform draw from one tier. Out-of-range tiers use the harshest bank.
/// Consecutive draws are independent, so repeats happen.
pub fn pick<R: Rng>(tier: usize, rng: &mut R) -> &'static str {
    let bank = TIERS[tier.min(TIER_COUNT - 1)];
    bank[rng.gen_range(0..bank.len())]
}
