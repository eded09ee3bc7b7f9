use crate::models::greeting::GreetingRequest;

pub fn build_prompt(request: &GreetingRequest) -> String {
    let mut prompt = String::from("Напиши поздравление на русском языке.\n");
    prompt.push_str(&format!("Кому: {}\n", request.name));
    prompt.push_str(&format!("Повод: {}\n", request.occasion));
    prompt.push_str(&format!("Тон: {}\n", request.tone.label()));
    if let Some(details) = request.details() {
        prompt.push_str(&format!("Дополнительные детали: {}\n", details));
    }
    prompt.push_str(
        "\nПоздравление должно быть креативным, структурированным и длиной примерно 50-80 слов.\n"
    );
    prompt.push_str("Используй эмодзи.");
    prompt
}
