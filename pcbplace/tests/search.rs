#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::Result;
    use float_cmp::approx_eq;
    use pcbplace::entities::{Constraint, Instance};
    use pcbplace::geometry::geo_enums::{BoardSide, Rotation};
    use pcbplace::geometry::primitives::{Point, Rect};
    use pcbplace::io::ext_repr::{ExtBoard, ExtInstance};
    use pcbplace::io::import;
    use pcbplace::search::{PlacementSearch, SearchOutcome, SearchPlan, find_solution};
    use pcbplace::util::SearchConfig;
    use pcbplace::util::assertions;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .try_init();
    }

    fn pcb50() -> Instance {
        import(&ExtInstance::default()).unwrap()
    }

    fn config(time_limit: Duration) -> SearchConfig {
        SearchConfig {
            time_limit,
            ..SearchConfig::default()
        }
    }

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    #[test]
    fn solve_default_instance() -> Result<()> {
        init_logger();
        let instance = pcb50();
        let solution = find_solution(&instance, SearchConfig::default())?
            .expect("default instance should be solved within the time limit");

        let id = |name: &str| instance.component_id(name).unwrap();
        let position = |name: &str| solution.placed_component(id(name)).position;
        let rotation = |name: &str| solution.placed_component(id(name)).rotation;

        //vertical mass-balance pair against the left and right sides
        assert_eq!(position("MB1"), Point(0.0, 0.0));
        assert_eq!(position("MB2"), Point(45.0, 0.0));
        assert_eq!(rotation("MB1"), Rotation::Deg0);
        assert_eq!(rotation("MB2"), Rotation::Deg0);

        assert_eq!(position("USB"), Point(6.0, 45.0));
        assert_eq!(rotation("USB"), Rotation::Deg0);
        assert_eq!(position("MCU"), Point(23.0, 23.0));
        assert_eq!(position("CRYSTAL"), Point(30.0, 30.0));
        assert_eq!(
            solution.placed_component(id("CRYSTAL")).center(),
            Point(32.5, 32.5)
        );

        assert_eq!(solution.keepouts.len(), 1);
        let keepout = &solution.keepouts[0];
        assert_eq!(keepout.owner, id("USB"));
        assert_eq!(keepout.side, BoardSide::Bottom);
        assert_eq!(keepout.rect, rect(6.0, 35.0, 11.0, 50.0));
        let usb_bbox = &solution.placed_component(id("USB")).bbox;
        assert_eq!(instance.board.touched_sides(usb_bbox, 1e-6).count(), 1);

        let Point(x, y) = solution.center_of_mass;
        assert!(approx_eq!(f64, x, 23.3, epsilon = 1e-9), "{x}");
        assert!(approx_eq!(f64, y, 24.1, epsilon = 1e-9), "{y}");

        assert!(assertions::solution_satisfies_constraints(&instance, &solution));
        Ok(())
    }

    #[test]
    fn search_is_deterministic() -> Result<()> {
        let instance = pcb50();
        let mut first = PlacementSearch::new(&instance, SearchConfig::default())?;
        let mut second = PlacementSearch::new(&instance, SearchConfig::default())?;

        let (a, b) = (first.solve()?, second.solve()?);
        assert!(a.solution().is_some());
        assert_eq!(a, b);
        assert_eq!(first.n_candidates, second.n_candidates);
        Ok(())
    }

    #[test]
    fn zero_budget_times_out() -> Result<()> {
        let instance = pcb50();
        let mut search = PlacementSearch::new(&instance, config(Duration::ZERO))?;
        assert_eq!(search.solve()?, SearchOutcome::TimedOut);
        assert_eq!(search.n_candidates, 0);

        assert_eq!(find_solution(&instance, config(Duration::ZERO))?, None);
        Ok(())
    }

    #[test_case(Duration::from_millis(500); "half a second")]
    #[test_case(Duration::from_secs(5); "five seconds")]
    #[test_case(Duration::from_secs(60); "a minute")]
    fn larger_budget_finds_the_same_solution(time_limit: Duration) -> Result<()> {
        let instance = pcb50();
        let reference = find_solution(&instance, SearchConfig::default())?;
        let solution = find_solution(&instance, config(time_limit))?;
        assert!(solution.is_some());
        assert_eq!(solution, reference);
        Ok(())
    }

    #[test]
    fn shrinking_budget_never_recovers_a_solution() -> Result<()> {
        let instance = pcb50();
        let reference = find_solution(&instance, SearchConfig::default())?;
        assert!(reference.is_some());

        let budgets = [1900, 500, 200, 50, 10, 0].map(Duration::from_millis);
        let mut lost = false;
        for time_limit in budgets {
            let solution = find_solution(&instance, config(time_limit))?;
            match solution {
                Some(_) => {
                    assert!(!lost, "found again with {time_limit:?}");
                    assert_eq!(solution, reference);
                }
                None => lost = true,
            }
        }
        //the last budget is zero
        assert!(lost);
        Ok(())
    }

    #[test]
    fn too_small_board_is_exhausted() -> Result<()> {
        init_logger();
        let mut ext_instance = ExtInstance::default();
        //the 15 long mass-balance twins fit in neither orientation
        ext_instance.board = ExtBoard {
            width: 12.0,
            height: 12.0,
        };
        let instance = import(&ext_instance)?;

        let mut search = PlacementSearch::new(&instance, SearchConfig::default())?;
        assert_eq!(search.solve()?, SearchOutcome::Exhausted);
        assert_eq!(search.n_candidates, 0);
        Ok(())
    }

    #[test]
    fn unbalanceable_instance_is_exhausted() -> Result<()> {
        let mut instance = pcb50();
        for constraint in instance.constraints.iter_mut() {
            if let Constraint::Balance { tolerance } = constraint {
                *tolerance = 0.0;
            }
        }
        //the center of mass never lands exactly on the board center, every candidate is explored
        let mut search = PlacementSearch::new(&instance, config(Duration::from_secs(600)))?;
        let outcome = search.solve()?;
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert!(search.n_candidates > 0);
        Ok(())
    }

    #[test]
    fn solution_without_balance_is_found_earlier() -> Result<()> {
        let mut instance = pcb50();
        instance
            .constraints
            .retain(|c| !matches!(c, Constraint::Balance { .. }));

        let mut unbalanced = PlacementSearch::new(&instance, SearchConfig::default())?;
        let solution = unbalanced
            .solve()?
            .into_solution()
            .expect("relaxed instance should be solved");
        assert!(assertions::solution_satisfies_constraints(&instance, &solution));

        let reference = pcb50();
        let mut balanced = PlacementSearch::new(&reference, SearchConfig::default())?;
        balanced.solve()?;
        assert!(unbalanced.n_candidates < balanced.n_candidates);
        Ok(())
    }

    #[test]
    fn invalid_grid_step_is_rejected() {
        let instance = pcb50();
        let config = SearchConfig {
            grid_step: 0.0,
            ..SearchConfig::default()
        };
        assert!(PlacementSearch::new(&instance, config).is_err());
    }

    #[test_case(1e-12; "picometer")]
    #[test_case(f64::MIN_POSITIVE; "smallest positive")]
    fn too_fine_grid_step_is_rejected(grid_step: f64) {
        let instance = pcb50();
        let config = SearchConfig {
            grid_step,
            ..SearchConfig::default()
        };
        let err = SearchPlan::compile(&instance, &config).unwrap_err();
        assert!(format!("{err}").contains("too fine"), "{err}");
    }

    #[test]
    fn fine_grid_step_within_bounds_compiles() -> Result<()> {
        let instance = pcb50();
        let config = SearchConfig {
            grid_step: 0.01,
            ..SearchConfig::default()
        };
        let plan = SearchPlan::compile(&instance, &config)?;
        assert_eq!(plan.stages.len(), 4);
        Ok(())
    }

    #[test]
    fn plan_schedules_checks_when_decidable() -> Result<()> {
        let instance = pcb50();
        let plan = SearchPlan::compile(&instance, &SearchConfig::default())?;

        assert_eq!(plan.stages.len(), 4);
        assert_eq!(plan.n_keepouts, 1);

        //mirrored pair: two containment checks and the exclusion between the twins
        assert_eq!(plan.stages[0].pruning.len(), 3);
        assert!(plan.stages[0].checks.is_empty());
        //the keepout of the USB connector is derived as soon as it is committed
        assert_eq!(plan.stages[1].keepouts.len(), 1);
        assert_eq!(plan.stages[1].keepouts[0].obstacle, 0);
        //proximity, line of sight and balance all wait for the crystal
        assert!(plan.stages[2].checks.is_empty());
        assert_eq!(plan.stages[3].checks.len(), 3);
        Ok(())
    }

    #[test]
    fn serialized_config_uses_seconds() -> Result<()> {
        let json = r#"{"time_limit_s": 0.25, "grid_step": 0.5}"#;
        let config: SearchConfig = serde_json::from_str(json)?;
        assert_eq!(config.time_limit, Duration::from_millis(250));
        assert_eq!(config.grid_step, 0.5);
        assert!(serde_json::from_str::<SearchConfig>(r#"{"time_limit_s": -1.0, "grid_step": 1.0}"#).is_err());
        Ok(())
    }
}
