use anyhow::{Result, anyhow, bail};
use gymlog_domain::{ExerciseForm, Reps, SetForm, SetNumber, Weight};

/// Parse an exercise given on the command line.
///
/// The format is `NAME[=SET,SET,...]` where each set is
/// `[SET_NUMBER:]WEIGHTxREPS`, e.g. `Bench Press=80x5,2:85x3`. As sets are
/// separated by commas, decimal weights must use a dot (`12.5x10`). An
/// exercise without sets yields a form with no sets.
pub fn exercise(input: &str) -> Result<ExerciseForm> {
    let (name, sets) = match input.split_once('=') {
        Some((name, sets)) => (name.trim(), sets.trim()),
        None => (input.trim(), ""),
    };

    if name.is_empty() {
        bail!("missing exercise name in \"{input}\"");
    }

    Ok(ExerciseForm {
        name: name.to_string(),
        sets: if sets.is_empty() {
            vec![]
        } else {
            sets.split(',').map(set).collect::<Result<Vec<_>>>()?
        },
    })
}

fn set(input: &str) -> Result<SetForm> {
    let input = input.trim();
    let (set_number, rest) = match input.split_once(':') {
        Some((set_number, rest)) => (set_number.trim(), rest.trim()),
        None => ("", input),
    };
    let Some((weight, reps)) = rest.split_once(|c: char| c == 'x' || c == 'X') else {
        if rest.parse::<u32>().is_ok() {
            bail!("invalid set \"{input}\", expected WEIGHTxREPS (use a dot in decimal weights)");
        }
        bail!("invalid set \"{input}\", expected WEIGHTxREPS");
    };

    if !set_number.is_empty() {
        SetNumber::try_from(set_number).map_err(|err| anyhow!("{err}: \"{input}\""))?;
    }
    Weight::try_from(weight).map_err(|err| anyhow!("{err}: \"{input}\""))?;
    Reps::try_from(reps).map_err(|err| anyhow!("{err}: \"{input}\""))?;

    Ok(SetForm {
        set_number: set_number.to_string(),
        weight: weight.trim().to_string(),
        reps: reps.trim().to_string(),
    })
}
