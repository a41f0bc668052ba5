//! Interactive terminal menu

use crate::application::{ExamService, ExamStore};
use crate::cli::output::{describe_date, format_exam_line, format_exam_list};
use crate::domain::Exam;
use crate::error::{ExamError, Result};
use crate::infrastructure::ExamStorage;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 50;

/// Menu driving an [`ExamService`] from line-based input
pub struct Menu<S: ExamStorage, R: BufRead, W: Write> {
    service: ExamService<S>,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<S: ExamStorage, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(store: ExamStore<S>, input: R, output: W) -> Self {
        Menu {
            service: ExamService::new(store),
            input,
            output,
            today: Local::now().date_naive(),
        }
    }

    /// Override the date countdowns are measured from
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Load stored exams; call once before [`Menu::run`]
    pub fn initialize(&mut self) -> Result<()> {
        self.service.initialize()
    }

    pub fn service(&self) -> &ExamService<S> {
        &self.service
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_header()?;
            writeln!(self.output, "Main Menu:")?;
            writeln!(self.output, "1. Show exams")?;
            writeln!(self.output, "2. Add exam")?;
            writeln!(self.output, "3. Edit exam")?;
            writeln!(self.output, "4. Delete exam")?;
            writeln!(self.output, "5. Delete all exams")?;
            writeln!(self.output, "6. Exit program")?;
            self.print_separator()?;

            let Some(choice) = self.prompt("Select an option (1-6):")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.show_exams()?,
                "2" => self.add_exam()?,
                "3" => self.edit_exam()?,
                "4" => self.delete_exam()?,
                "5" => self.delete_all_exams()?,
                "6" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid input. Please select 1-6.")?;
                    self.pause()?;
                }
            }
        }
    }

    fn show_exams(&mut self) -> Result<()> {
        self.print_header()?;
        let exams = self.service.exams();
        if !exams.is_empty() {
            writeln!(self.output, "Your exams:\n")?;
        }
        writeln!(self.output, "{}", format_exam_list(&exams, self.today, false))?;
        self.print_separator()?;
        self.pause()
    }

    fn add_exam(&mut self) -> Result<()> {
        self.print_header()?;
        writeln!(self.output, "Add new exam\n")?;

        let Some(name) = self.prompt("Exam name:")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Error: Name cannot be empty.")?;
            return self.pause();
        }

        writeln!(self.output, "Format: DD.MM.YYYY (e.g. 03.09.2025)")?;
        let Some(date) = self.prompt("Date:")? else {
            return Ok(());
        };

        match self.service.add(&name, &date) {
            Ok(exam) => {
                writeln!(self.output, "Exam \"{}\" was successfully added!", exam.name)?;
            }
            Err(e) => self.report_input_error(e)?,
        }
        self.pause()
    }

    fn edit_exam(&mut self) -> Result<()> {
        self.print_header()?;
        let Some(exam) = self.select_exam("edit")? else {
            return Ok(());
        };

        writeln!(self.output, "\nCurrent data:")?;
        writeln!(self.output, "Name: {}", exam.name)?;
        writeln!(self.output, "Date: {}\n", describe_date(&exam.date))?;

        let Some(new_name) =
            self.prompt(&format!("New name (leave empty for \"{}\"):", exam.name))?
        else {
            return Ok(());
        };
        let Some(new_date) =
            self.prompt("New date (leave empty for current date, Format: DD.MM.YYYY):")?
        else {
            return Ok(());
        };

        match self
            .service
            .edit(&exam.id, Some(new_name.as_str()), Some(new_date.as_str()))
        {
            Ok(_) => writeln!(self.output, "Exam was successfully edited!")?,
            Err(e) => self.report_input_error(e)?,
        }
        self.pause()
    }

    fn delete_exam(&mut self) -> Result<()> {
        self.print_header()?;
        let Some(exam) = self.select_exam("delete")? else {
            return Ok(());
        };

        writeln!(
            self.output,
            "\nAre you sure you want to delete \"{}\"?",
            exam.name
        )?;
        let Some(confirmation) = self.prompt("Confirm with \"yes\":")? else {
            return Ok(());
        };

        if confirmation.eq_ignore_ascii_case("yes") {
            match self.service.delete(&exam.id) {
                Ok(_) => writeln!(self.output, "Exam \"{}\" was deleted.", exam.name)?,
                Err(e) => self.report_input_error(e)?,
            }
        } else {
            writeln!(self.output, "Deletion cancelled.")?;
        }
        self.pause()
    }

    fn delete_all_exams(&mut self) -> Result<()> {
        self.print_header()?;
        let exams = self.service.exams();
        if exams.is_empty() {
            writeln!(self.output, "No exams available to delete.")?;
            return self.pause();
        }

        writeln!(self.output, "Delete all exams\n")?;
        writeln!(self.output, "You have {} exam(s) saved:\n", exams.len())?;
        for (index, exam) in exams.iter().enumerate() {
            writeln!(self.output, "{}", format_exam_line(index + 1, exam))?;
        }
        writeln!(self.output, "\nWARNING: This action cannot be undone!")?;
        writeln!(
            self.output,
            "All {} exams will be permanently deleted.\n",
            exams.len()
        )?;
        self.print_separator()?;

        let Some(first) = self.prompt("Are you sure? Type \"DELETE ALL\":")? else {
            return Ok(());
        };
        if first != "DELETE ALL" {
            writeln!(self.output, "Deletion cancelled.")?;
            return self.pause();
        }

        let Some(second) = self.prompt("Final confirmation - type \"YES\":")? else {
            return Ok(());
        };
        if second.eq_ignore_ascii_case("yes") {
            let count = self.service.clear()?;
            writeln!(self.output, "All {} exams were successfully deleted.", count)?;
        } else {
            writeln!(self.output, "Deletion cancelled.")?;
        }
        self.pause()
    }

    /// List exams and let the user pick one by number
    fn select_exam(&mut self, action: &str) -> Result<Option<Exam>> {
        let exams = self.service.exams();
        if exams.is_empty() {
            writeln!(self.output, "No exams available to {}.", action)?;
            self.pause()?;
            return Ok(None);
        }

        writeln!(self.output, "{} exam\n", capitalize(action))?;
        for (index, exam) in exams.iter().enumerate() {
            writeln!(self.output, "{}", format_exam_line(index + 1, exam))?;
        }
        self.print_separator()?;

        let Some(choice) =
            self.prompt(&format!("Which exam would you like to {}? (Number):", action))?
        else {
            return Ok(None);
        };

        match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= exams.len() => Ok(Some(exams[n - 1].clone())),
            _ => {
                writeln!(self.output, "Invalid selection.")?;
                self.pause()?;
                Ok(None)
            }
        }
    }

    /// Print recoverable input errors; anything else is fatal
    fn report_input_error(&mut self, error: ExamError) -> Result<()> {
        match error {
            ExamError::InvalidFormat(_) => {
                writeln!(self.output, "Error: Invalid date format.")?;
                Ok(())
            }
            ExamError::EmptyName => {
                writeln!(self.output, "Error: Name cannot be empty.")?;
                Ok(())
            }
            ExamError::NotFound(_) => {
                writeln!(self.output, "Exam no longer exists.")?;
                Ok(())
            }
            other => Err(other),
        }
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", message)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn pause(&mut self) -> Result<()> {
        self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    fn print_header(&mut self) -> Result<()> {
        writeln!(self.output, "\nEXAM PLANNER - Manage your exams\n")?;
        Ok(())
    }

    fn print_separator(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorage;

    type TestMenu<'a> = Menu<MemoryStorage, &'a [u8], Vec<u8>>;

    fn run_script(storage: MemoryStorage, script: &str) -> TestMenu<'_> {
        let mut menu = Menu::new(ExamStore::new(storage), script.as_bytes(), Vec::new())
            .with_today(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        menu.initialize().unwrap();
        menu.run().unwrap();
        menu
    }

    fn output(menu: &TestMenu<'_>) -> String {
        String::from_utf8(menu.output().clone()).unwrap()
    }

    fn seeded() -> MemoryStorage {
        MemoryStorage::with_contents(
            r#"{"exams": [
                {"id": "p", "name": "Physics", "date": "2025-10-01"},
                {"id": "m", "name": "Math", "date": "2025-09-03"}
            ]}"#,
        )
    }

    #[test]
    fn test_exit_option() {
        let menu = run_script(MemoryStorage::new(), "6\n");
        assert!(output(&menu).contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let menu = run_script(MemoryStorage::new(), "");
        assert!(output(&menu).contains("Main Menu:"));
    }

    #[test]
    fn test_invalid_choice() {
        let menu = run_script(MemoryStorage::new(), "9\n\n6\n");
        assert!(output(&menu).contains("Invalid input. Please select 1-6."));
    }

    #[test]
    fn test_show_exams_sorted() {
        let menu = run_script(seeded(), "1\n\n6\n");
        let out = output(&menu);

        let math = out.find("1. Math").unwrap();
        let physics = out.find("2. Physics").unwrap();
        assert!(math < physics);
        assert!(out.contains("Time remaining: 2 days"));
    }

    #[test]
    fn test_show_exams_empty() {
        let menu = run_script(MemoryStorage::new(), "1\n\n6\n");
        assert!(output(&menu).contains("No exams available yet."));
    }

    #[test]
    fn test_add_exam() {
        let menu = run_script(MemoryStorage::new(), "2\nMath\n03.09.2025\n\n6\n");

        let exams = menu.service().exams();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].name, "Math");
        assert_eq!(exams[0].date, "2025-09-03");
        assert!(output(&menu).contains("Exam \"Math\" was successfully added!"));
        assert!(menu.service().store().storage().contents().unwrap().contains("Math"));
    }

    #[test]
    fn test_add_exam_empty_name() {
        let menu = run_script(MemoryStorage::new(), "2\n   \n\n6\n");

        assert!(menu.service().exams().is_empty());
        assert!(output(&menu).contains("Error: Name cannot be empty."));
    }

    #[test]
    fn test_add_exam_invalid_date() {
        let menu = run_script(MemoryStorage::new(), "2\nMath\n3.9.2025\n\n6\n");

        assert!(menu.service().exams().is_empty());
        assert!(output(&menu).contains("Error: Invalid date format."));
    }

    #[test]
    fn test_edit_exam_name_only() {
        // Math sorts first, so it is number 1
        let menu = run_script(seeded(), "3\n1\nAnalysis\n\n\n6\n");

        let math = menu.service().store().get_by_id("m").unwrap();
        assert_eq!(math.name, "Analysis");
        assert_eq!(math.date, "2025-09-03");
        assert!(output(&menu).contains("Exam was successfully edited!"));
    }

    #[test]
    fn test_edit_exam_date_only() {
        let menu = run_script(seeded(), "3\n2\n\n01.01.2026\n\n6\n");

        let physics = menu.service().store().get_by_id("p").unwrap();
        assert_eq!(physics.name, "Physics");
        assert_eq!(physics.date, "2026-01-01");
    }

    #[test]
    fn test_edit_exam_invalid_date() {
        let menu = run_script(seeded(), "3\n1\nAnalysis\n31.02.2026\n\n6\n");

        let math = menu.service().store().get_by_id("m").unwrap();
        assert_eq!(math.name, "Math");
        assert!(output(&menu).contains("Error: Invalid date format."));
    }

    #[test]
    fn test_selection_screens_have_titles() {
        let menu = run_script(seeded(), "3\n9\n\n4\n9\n\n6\n");
        let out = output(&menu);

        let edit_title = out.find("Edit exam\n\n").unwrap();
        let delete_title = out.find("Delete exam\n\n").unwrap();
        assert!(edit_title < out.find("Which exam would you like to edit?").unwrap());
        assert!(delete_title < out.find("Which exam would you like to delete?").unwrap());
    }

    #[test]
    fn test_edit_invalid_selection() {
        let menu = run_script(seeded(), "3\n7\n\n6\n");
        assert!(output(&menu).contains("Invalid selection."));
    }

    #[test]
    fn test_edit_no_exams() {
        let menu = run_script(MemoryStorage::new(), "3\n\n6\n");
        assert!(output(&menu).contains("No exams available to edit."));
    }

    #[test]
    fn test_delete_exam_confirmed() {
        let menu = run_script(seeded(), "4\n1\nYES\n\n6\n");

        assert!(menu.service().store().get_by_id("m").is_none());
        assert_eq!(menu.service().exams().len(), 1);
        assert!(output(&menu).contains("Exam \"Math\" was deleted."));
    }

    #[test]
    fn test_delete_exam_cancelled() {
        let menu = run_script(seeded(), "4\n1\nno\n\n6\n");

        assert_eq!(menu.service().exams().len(), 2);
        assert!(output(&menu).contains("Deletion cancelled."));
    }

    #[test]
    fn test_delete_all_exams() {
        let menu = run_script(seeded(), "5\nDELETE ALL\nyes\n\n6\n");

        assert!(menu.service().exams().is_empty());
        assert!(output(&menu).contains("All 2 exams were successfully deleted."));
        let stored = menu.service().store().storage().contents().unwrap();
        assert!(!stored.contains("Math"));
    }

    #[test]
    fn test_delete_all_requires_exact_phrase() {
        let menu = run_script(seeded(), "5\ndelete all\n\n6\n");

        assert_eq!(menu.service().exams().len(), 2);
        assert!(output(&menu).contains("Deletion cancelled."));
    }

    #[test]
    fn test_delete_all_second_confirmation_declined() {
        let menu = run_script(seeded(), "5\nDELETE ALL\nnope\n\n6\n");

        assert_eq!(menu.service().exams().len(), 2);
    }

    #[test]
    fn test_failed_save_is_fatal() {
        let storage = MemoryStorage::with_contents("{}").fail_writes();
        let mut menu = Menu::new(
            ExamStore::new(storage),
            "2\nMath\n03.09.2025\n".as_bytes(),
            Vec::new(),
        );
        menu.initialize().unwrap();

        assert!(matches!(menu.run(), Err(ExamError::Storage(_))));
    }
}
